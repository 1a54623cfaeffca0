use rand::Rng;

pub const SAMPLE_PROMPTS: [&str; 8] = [
    "A serene mountain landscape at golden hour with a peaceful lake reflecting the sky",
    "A futuristic city skyline with flying cars and neon lights at night",
    "A magical forest with glowing mushrooms and fairy lights",
    "A cozy coffee shop interior with warm lighting and books on shelves",
    "A majestic dragon soaring through cloudy skies above ancient castle ruins",
    "An underwater scene with colorful coral reefs and tropical fish",
    "A steampunk airship floating above Victorian-era London",
    "A minimalist modern living room with natural light and plants",
];

pub fn pick_sample<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SAMPLE_PROMPTS[rng.gen_range(0..SAMPLE_PROMPTS.len())]
}
