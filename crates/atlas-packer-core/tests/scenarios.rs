use atlas_packer_core::prelude::*;

#[test]
fn trivial_single_fit() {
    let sprites = vec![InputSprite::new("solo".to_string(), 40, 40)];
    let opts = PackOptions::builder()
        .with_max_dimensions(64, 64)
        .padding(0)
        .build();
    let result = pack(sprites, opts).expect("pack");
    assert!(result.unpacked.is_empty());
    assert_eq!(result.atlases.len(), 1);
    let atlas = &result.atlases[0];
    assert!(atlas.width <= 64 && atlas.height <= 64);
    assert_eq!(atlas.sprites.len(), 1);
    assert_eq!(atlas.sprites[0].frame, Rect::new(0, 0, 40, 40));
    assert!(!atlas.sprites[0].rotated);
}

#[test]
fn forced_overflow_spills_to_second_atlas() {
    let sprites = vec![
        InputSprite::new("a".to_string(), 100, 100),
        InputSprite::new("b".to_string(), 100, 100),
    ];
    let opts = PackOptions::builder()
        .with_max_dimensions(100, 100)
        .padding(0)
        .build();
    let result = pack(sprites, opts).expect("pack");
    // The second sprite packs fine in an independent 100x100 attempt, so it
    // lands in a second atlas rather than in the unpacked list.
    assert!(result.unpacked.is_empty());
    assert_eq!(result.atlases.len(), 2);
    for atlas in &result.atlases {
        assert_eq!((atlas.width, atlas.height), (100, 100));
        assert_eq!(atlas.sprites.len(), 1);
        assert_eq!(atlas.sprites[0].frame, Rect::new(0, 0, 100, 100));
    }
}

#[test]
fn zero_area_trim_is_never_attempted() {
    let mut degenerate = InputSprite::new("empty".to_string(), 0, 10);
    degenerate.source_size = (32, 32);
    let sprites = vec![degenerate.clone(), InputSprite::new("ok".to_string(), 20, 20)];
    let opts = PackOptions::builder().with_max_dimensions(64, 64).build();
    let result = pack(sprites, opts).expect("pack");
    assert_eq!(result.atlases.len(), 1);
    assert_eq!(result.atlases[0].sprites.len(), 1);
    assert_eq!(result.atlases[0].sprites[0].key, "ok");
    // Reported untouched, raw dimensions included.
    assert_eq!(result.unpacked, vec![degenerate]);
}

#[test]
fn oversize_sprite_is_reported_unpacked() {
    let sprites = vec![
        InputSprite::new("wide".to_string(), 300, 20),
        InputSprite::new("ok".to_string(), 30, 30),
    ];
    let opts = PackOptions::builder()
        .with_max_dimensions(100, 100)
        .padding(0)
        .build();
    let result = pack(sprites, opts).expect("pack");
    assert_eq!(result.atlases.len(), 1);
    assert_eq!(result.unpacked.len(), 1);
    assert_eq!(result.unpacked[0].key, "wide");
}

#[test]
fn empty_input_yields_empty_result() {
    let result = pack(Vec::<InputSprite>::new(), PackOptions::default()).expect("pack");
    assert!(result.atlases.is_empty());
    assert!(result.unpacked.is_empty());
}
