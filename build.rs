use image::GenericImageView;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Boot logo size in pixels
const LOGO_WIDTH: u32 = 204;
const LOGO_HEIGHT: u32 = 192;

/// Convert PNG image to raw RGB565 (big endian) at build time
fn convert_image_to_rgb565(
    input_path: &str,
    output_path: &str,
    target_width: u32,
    target_height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", input_path);

    if !Path::new(input_path).exists() {
        // Empty file means no splash, the firmware skips it
        let mut file = File::create(output_path)?;
        file.write_all(&[])?;
        return Ok(());
    }

    println!("cargo:warning=Converting image: {}", input_path);

    let img = image::open(input_path)?;
    println!(
        "cargo:warning=Original image size: {}x{}",
        img.width(),
        img.height()
    );

    let resized = img.resize_exact(
        target_width,
        target_height,
        image::imageops::FilterType::Lanczos3,
    );
    let rgb = resized.to_rgb8();

    let mut buffer = Vec::with_capacity((target_width * target_height * 2) as usize);
    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        let value: u16 = ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3);
        buffer.extend_from_slice(&value.to_be_bytes());
    }

    let mut file = File::create(output_path)?;
    file.write_all(&buffer)?;

    println!(
        "cargo:warning=Logo saved to: {} ({} bytes)",
        output_path,
        buffer.len()
    );
    Ok(())
}

fn main() {
    embuild::espidf::sysenv::output();

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let logo_output = format!("{}/logo.bin", out_dir);

    if let Err(e) = convert_image_to_rgb565("logo.png", &logo_output, LOGO_WIDTH, LOGO_HEIGHT) {
        println!("cargo:warning=Failed to convert logo.png: {}", e);
        // Keep the include_bytes! target present
        let _ = File::create(&logo_output);
    }
}
