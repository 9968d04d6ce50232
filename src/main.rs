// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    // Boot logo converted at build time, empty when logo.png was missing
    const LOGO_IMAGE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/logo.bin"));

    log::info!("{}", minidesk::config::FIRMWARE_VERSION);
    minidesk::esp::run(LOGO_IMAGE)
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!(
        "minidesk {} only runs on the ESP32-S3, build it for the xtensa-esp32s3-espidf target",
        env!("CARGO_PKG_VERSION")
    );
    std::process::exit(1);
}
