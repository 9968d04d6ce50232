//! Console command names

use std::fmt;

/// Everything the console can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Menu,
    Desktop,
    Wifi,
    Info,
    Scan,
    Reset,
    Shutdown,
    Notepad,
    Erase,
}

impl Command {
    /// Match one input line.
    ///
    /// Whole words are checked first, then the first letter decides for the
    /// W, I, S, R and V shortcuts, so `wifi` and `Info` work too.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if input.eq_ignore_ascii_case("DESKTOP") {
            return Some(Command::Desktop);
        }
        match input {
            "1" => return Some(Command::Wifi),
            "2" => return Some(Command::Info),
            "3" => return Some(Command::Scan),
            "4" => return Some(Command::Shutdown),
            _ => {}
        }
        if input.eq_ignore_ascii_case("N") {
            return Some(Command::Notepad);
        }
        if input.eq_ignore_ascii_case("E") {
            return Some(Command::Erase);
        }
        if ["M", "MENU", "?"]
            .iter()
            .any(|alias| input.eq_ignore_ascii_case(alias))
        {
            return Some(Command::Menu);
        }

        match input.chars().next()?.to_ascii_uppercase() {
            'W' => Some(Command::Wifi),
            'I' => Some(Command::Info),
            'S' => Some(Command::Scan),
            'R' => Some(Command::Reset),
            'V' => Some(Command::Shutdown),
            _ => None,
        }
    }

    /// Canonical single letter, or word for the desktop
    pub fn shortcut(self) -> &'static str {
        match self {
            Command::Menu => "M",
            Command::Desktop => "DESKTOP",
            Command::Wifi => "W",
            Command::Info => "I",
            Command::Scan => "S",
            Command::Reset => "R",
            Command::Shutdown => "V",
            Command::Notepad => "N",
            Command::Erase => "E",
        }
    }

    /// One line of the main menu
    pub fn description(self) -> &'static str {
        match self {
            Command::Menu => "Show this menu",
            Command::Desktop => "desktop simulation with icons",
            Command::Wifi => "WiFi configuration",
            Command::Info => "Info",
            Command::Scan => "WiFi scan",
            Command::Reset => "Reset",
            Command::Shutdown => "Shutdown",
            Command::Notepad => "Notepad",
            Command::Erase => "Erase EEPROM",
        }
    }

    /// Menu order
    pub const ALL: [Command; 9] = [
        Command::Wifi,
        Command::Info,
        Command::Scan,
        Command::Reset,
        Command::Shutdown,
        Command::Notepad,
        Command::Erase,
        Command::Desktop,
        Command::Menu,
    ];
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.shortcut(), self.description())
    }
}
