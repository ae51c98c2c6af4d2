use atlas_packer_core::prelude::*;
use rand::{Rng, SeedableRng};

fn random_sprites(seed: u64, count: usize) -> Vec<InputSprite> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let w = rng.gen_range(4..=48);
            let h = rng.gen_range(4..=48);
            InputSprite::new(format!("s{}", i), w, h)
        })
        .collect()
}

#[test]
fn identical_input_gives_identical_output() {
    let sprites = random_sprites(42, 60);
    let opts = PackOptions::builder()
        .with_max_dimensions(256, 256)
        .padding(2)
        .allow_rotate(true)
        .build();

    let first = pack(sprites.clone(), opts.clone()).expect("pack");
    let second = pack(sprites, opts).expect("pack");
    assert_eq!(first, second);
}

#[test]
fn pinned_heuristic_is_deterministic_too() {
    let sprites = random_sprites(2024, 40);
    let opts = PackOptions::builder()
        .with_max_dimensions(256, 256)
        .padding(0)
        .algorithm(Some(Heuristic::BottomLeft))
        .build();

    let first = pack(sprites.clone(), opts.clone()).expect("pack");
    let second = pack(sprites, opts).expect("pack");
    assert_eq!(first, second);
}
