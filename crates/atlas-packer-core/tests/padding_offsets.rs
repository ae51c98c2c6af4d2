use atlas_packer_core::prelude::*;

#[test]
fn margin_shifts_the_blit_offset() {
    let sprites = vec![InputSprite::new("solo".to_string(), 40, 40)];
    let opts = PackOptions::builder()
        .with_max_dimensions(64, 64)
        .padding(2)
        .bleed(1)
        .build();
    let result = pack(sprites, opts).expect("pack");
    assert_eq!(result.atlases.len(), 1);
    let atlas = &result.atlases[0];
    // Bin packed at the padded size 46x46; the frame sits margin pixels in.
    assert_eq!((atlas.width, atlas.height), (46, 46));
    assert_eq!(atlas.sprites[0].frame, Rect::new(3, 3, 40, 40));
}

#[test]
fn margins_keep_sprites_apart() {
    let sprites: Vec<InputSprite> = (0..12)
        .map(|i| InputSprite::new(format!("s{}", i), 20, 20))
        .collect();
    let margin = 3u32;
    let opts = PackOptions::builder()
        .with_max_dimensions(128, 128)
        .padding(2)
        .bleed(1)
        .build();
    let result = pack(sprites, opts).expect("pack");
    assert!(result.unpacked.is_empty());
    for atlas in &result.atlases {
        for s in &atlas.sprites {
            assert!(s.frame.x >= margin && s.frame.y >= margin);
            assert!(s.frame.x + s.frame.w + margin <= atlas.width);
            assert!(s.frame.y + s.frame.h + margin <= atlas.height);
        }
        // Even expanded by the reserved margin the slots stay disjoint.
        for i in 0..atlas.sprites.len() {
            for j in (i + 1)..atlas.sprites.len() {
                let a = atlas.sprites[i].frame;
                let b = atlas.sprites[j].frame;
                let (ax1, ay1) = (a.x - margin, a.y - margin);
                let (ax2, ay2) = (a.x + a.w + margin, a.y + a.h + margin);
                let (bx1, by1) = (b.x - margin, b.y - margin);
                let (bx2, by2) = (b.x + b.w + margin, b.y + b.h + margin);
                let overlap = !(ax1 >= bx2 || bx1 >= ax2 || ay1 >= by2 || by1 >= ay2);
                assert!(!overlap, "padded slots overlap: {:?} vs {:?}", a, b);
            }
        }
    }
}
