use std::env;

use imageops_sharpen::{LaplacianDepth, SharpenConfig, SharpenExt};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 4 || args.len() > 5 {
        eprintln!(
            "Usage: {} <input_image> <strength> <output_image> [unsharp|detail|laplacian8|laplacian16]",
            args[0]
        );
        eprintln!("Example: RUST_LOG=debug {} input.png 0.8 output.png", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let strength: f32 = args[2].parse().map_err(|_| "Invalid strength")?;
    let output_path = &args[3];

    let config = match args.get(4).map(String::as_str) {
        None | Some("unsharp") => SharpenConfig::unsharp_mask(1.0, strength),
        Some("detail") => SharpenConfig::detail_enhance(1.0, strength),
        Some("laplacian8") => SharpenConfig::laplacian(LaplacianDepth::Saturating8, strength),
        Some("laplacian16") => SharpenConfig::laplacian(LaplacianDepth::Signed16, strength),
        Some(other) => return Err(format!("Unknown method: {other}").into()),
    };

    // 透過情報を保つため RGBA として読み込む
    let img = image::open(input_path)?;
    let rgba = image::DynamicImage::ImageRgba8(img.to_rgba8());
    println!("Processing {}x{} image with {:?}", rgba.width(), rgba.height(), config);

    let sharpened = rgba.sharpen_with(&config)?;
    sharpened.save(output_path)?;

    println!("Saved sharpened image to {output_path}");
    Ok(())
}
