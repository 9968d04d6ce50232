pub struct Cmd;
impl Cmd {
    // System
    pub const SW_RESET: u8 = 0x01;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const NORMAL_MODE_ON: u8 = 0x13;
    pub const INVERSION_OFF: u8 = 0x20;
    pub const GAMMA_SET: u8 = 0x26;
    pub const DISPLAY_ON: u8 = 0x29;

    // Memory access
    pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
    pub const PAGE_ADDRESS_SET: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;
    pub const PIXEL_FORMAT_SET: u8 = 0x3A;

    // Panel
    pub const FRAME_RATE_CONTROL: u8 = 0xB1;
    pub const DISPLAY_FUNCTION_CONTROL: u8 = 0xB6;
    pub const POWER_CONTROL_1: u8 = 0xC0;
    pub const POWER_CONTROL_2: u8 = 0xC1;
    pub const VCOM_CONTROL_1: u8 = 0xC5;
    pub const VCOM_CONTROL_2: u8 = 0xC7;
    pub const POSITIVE_GAMMA: u8 = 0xE0;
    pub const NEGATIVE_GAMMA: u8 = 0xE1;
}

/*
Sequence used by TFT_eSPI ILI9341_Init.h, vendor registers omitted:
0x01 - Software Reset
0xC0/0xC1 - Power Control
0xC5/0xC7 - VCOM Control
0x36 - Memory Access Control
0x3A - Pixel Format (0x55 = 16 bit)
0xB1 - Frame Rate Control
0xB6 - Display Function Control
0x26 - Gamma Curve
0xE0/0xE1 - Gamma Correction
0x11 - Sleep Out (120ms)
0x29 - Display On
*/
