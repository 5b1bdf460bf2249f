//! GPIO port capability
//!
//! The ESP32 exposes all of its pins as one port. Pin, GPIO and port numbers
//! therefore map one to one; these helpers exist so board-independent code can
//! ask the same questions it asks on chips with several ports.

/// The only GPIO port
pub const GPIO_PORT: u32 = 1;

/// Number of GPIO pins on the port
pub const GPIO_PIN_COUNT: u32 = 40;

/// Mask with every pin of the port set
pub const GPIO_ALL: u64 = (1u64 << GPIO_PIN_COUNT) - 1;

/// Port a pin belongs to
pub fn port_number(_pin: u32) -> u32 {
    GPIO_PORT
}

/// GPIO number for a pin
pub fn gpio_number(pin: u8) -> u8 {
    pin
}

/// Pin number for a GPIO
pub fn pin_number(pin: u32) -> u32 {
    pin
}

/// Mask of the pins usable as IO on `port`
pub fn port_io_pin_mask(_port: u32) -> u64 {
    GPIO_ALL
}

/// Whether `port` has a GPIO at `bit`
pub fn has_gpio(port: u32, bit: u32) -> bool {
    match 1u64.checked_shl(bit) {
        Some(flag) => port_io_pin_mask(port) & flag != 0,
        None => false,
    }
}

/// Whether `port` exists
pub fn has_port(port: u32) -> bool {
    port == GPIO_PORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_port() {
        assert!(has_port(1));
        assert!(!has_port(0));
        assert!(!has_port(2));
        assert_eq!(port_number(0), 1);
        assert_eq!(port_number(39), 1);
    }

    #[test]
    fn test_has_gpio_follows_mask() {
        // Every port number reports the single port's mask
        assert_eq!(port_io_pin_mask(2) & 1, 1);
        assert!(has_gpio(2, 0));
        assert!(!has_gpio(2, 40));
    }

    #[test]
    fn test_identity_mapping() {
        assert_eq!(gpio_number(21), 21);
        assert_eq!(pin_number(33), 33);
    }

    #[test]
    fn test_pin_mask() {
        assert_eq!(port_io_pin_mask(1).count_ones(), GPIO_PIN_COUNT);
        assert!(has_gpio(1, 0));
        assert!(has_gpio(1, 39));
        assert!(!has_gpio(1, 40));
        assert!(!has_gpio(1, 64));
        assert!(!has_gpio(1, 200));
    }
}
