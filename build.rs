use std::env;

/// Forward a build-time setting to the crate, falling back to `default`
fn forward(name: &str, default: &str) {
    println!("cargo:rerun-if-env-changed={}", name);
    match env::var(name) {
        Ok(value) => {
            println!("cargo:rustc-env={}={}", name, value);
            println!("cargo:warning=Using {} from environment: {}", name, value);
        }
        Err(_) => println!("cargo:rustc-env={}={}", name, default),
    }
}

fn main() {
    // Chip family printed in the model string
    forward("CHIP_FAMILY", "ESP32");

    // CPU clock in MHz (80, 160 or 240)
    forward("CPU_FREQ_MHZ", "240");

    // Board switches external sensors through a power bus
    forward("USE_POWER_BUS", "false");

    // GPIO driving the power bus load switch
    forward("POWER_BUS_PIN", "0");

    // Log the flash unique id at boot
    forward("READ_FLASH_UNIQUE_ID", "false");
}
