/// Various flags and constants used in the ILI9341 TFT display driver.
///
/// Register bit values for the controller, documented inline.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Memory Access Control (0x36) bits
    pub const MADCTL_MY: u8 = 0x80; // Row address order
    pub const MADCTL_MX: u8 = 0x40; // Column address order
    pub const MADCTL_MV: u8 = 0x20; // Row/column exchange
    pub const MADCTL_BGR: u8 = 0x08; // Panel is wired BGR

    // Pixel Format Set (0x3A)
    pub const PIXEL_FORMAT_16BIT: u8 = 0x55;

    // Power / VCOM defaults
    pub const POWER_CONTROL_1_GVDD: u8 = 0x23; // GVDD = 4.6V
    pub const POWER_CONTROL_2_STEP_UP: u8 = 0x10;
    pub const VCOM_HIGH: u8 = 0x3E;
    pub const VCOM_LOW: u8 = 0x28;
    pub const VCOM_OFFSET: u8 = 0x86;

    // Frame rate 70Hz, no division
    pub const FRAME_RATE_DIVISION: u8 = 0x00;
    pub const FRAME_RATE_70HZ: u8 = 0x18;

    // Gamma curve 1
    pub const GAMMA_CURVE_1: u8 = 0x01;

    pub const POSITIVE_GAMMA_TABLE: [u8; 15] = [
        0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09, 0x00,
    ];
    pub const NEGATIVE_GAMMA_TABLE: [u8; 15] = [
        0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36, 0x0F,
    ];

    pub const DISPLAY_FUNCTION_DEFAULT: [u8; 3] = [0x08, 0x82, 0x27];
}
