//! Numeric text menu driving a [`ParkingDesk`].

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use parkwise_core::{ParkingError, ParkingStyle};

use crate::desk::ParkingDesk;
use crate::metrics;

const RULE: &str = "----------------------";

/// Main menu entries, by their numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ListLots,
    RegisterLot,
    Park,
    Unpark,
    ChangeStyle,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 6] = [
        Self::ListLots,
        Self::RegisterLot,
        Self::Park,
        Self::Unpark,
        Self::ChangeStyle,
        Self::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::ListLots => "Display Available Parking Lot",
            Self::RegisterLot => "Register Parking Lot",
            Self::Park => "Park Car",
            Self::Unpark => "Unpark Car",
            Self::ChangeStyle => "Change Parking Style",
            Self::Exit => "Exit",
        }
    }

    fn metric_label(&self) -> &'static str {
        match self {
            Self::ListLots => "list_lots",
            Self::RegisterLot => "register_lot",
            Self::Park => "park",
            Self::Unpark => "unpark",
            Self::ChangeStyle => "change_style",
            Self::Exit => "exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::ListLots),
            "1" => Ok(Self::RegisterLot),
            "2" => Ok(Self::Park),
            "3" => Ok(Self::Unpark),
            "4" => Ok(Self::ChangeStyle),
            "5" => Ok(Self::Exit),
            _ => Err(ParkingError::UnrecognizedOptionMenu),
        }
    }
}

/// Map a style sub-menu code (`0`, `1`, `2`) to a style.
pub fn style_from_option(option: &str) -> Result<ParkingStyle, ParkingError> {
    match option {
        "0" => Ok(ParkingStyle::Default),
        "1" => Ok(ParkingStyle::Max),
        "2" => Ok(ParkingStyle::Vacant),
        _ => Err(ParkingError::UnrecognizedStyle),
    }
}

/// Parse a lot limit typed by the user.
pub fn parse_limit(input: &str) -> Result<usize, ParkingError> {
    match input.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ParkingError::LimitInvalid),
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu over any line-based input and output.
///
/// End of input ends the session quietly, wherever it happens.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self, desk: &mut ParkingDesk) -> io::Result<()> {
        loop {
            self.display_main_menu()?;
            let Some(choice) = self.prompt("Choose a menu: ")? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            let flow = match choice.parse::<MenuOption>() {
                Ok(option) => {
                    metrics::MENU_SELECTIONS
                        .with_label_values(&[option.metric_label()])
                        .inc();
                    self.dispatch(option, desk)?
                }
                Err(e) => {
                    self.report(e)?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    /// Consume the menu, handing back the output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, option: MenuOption, desk: &mut ParkingDesk) -> io::Result<Flow> {
        match option {
            MenuOption::ListLots => self.display_available_lots(desk),
            MenuOption::RegisterLot => self.register_lot(desk),
            MenuOption::Park => self.park(desk),
            MenuOption::Unpark => self.unpark(desk),
            MenuOption::ChangeStyle => self.change_style(desk),
            MenuOption::Exit => {
                writeln!(self.output, "Thank you for using Parking Lot Management!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn display_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "Parking Lot Management")?;
        writeln!(self.output, "{}", RULE)?;
        for (code, option) in MenuOption::ALL.iter().enumerate() {
            writeln!(self.output, "{} : {}", code, option.label())?;
        }
        writeln!(self.output)
    }

    fn display_style_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "Parking Style Menu")?;
        writeln!(self.output, "{}", RULE)?;
        for (code, style) in ParkingStyle::ALL.iter().enumerate() {
            writeln!(self.output, "{} : {}", code, style.description())?;
        }
        writeln!(self.output)
    }

    fn display_available_lots(&mut self, desk: &ParkingDesk) -> io::Result<Flow> {
        writeln!(self.output, "Available Parking Lot:")?;
        let lots = desk.available_parking_lot();
        if lots.is_empty() {
            writeln!(self.output, "None at the moment")?;
        }
        for (i, lot) in lots.iter().enumerate() {
            writeln!(
                self.output,
                "{}. Limit: {} | Vacant: {}",
                i + 1,
                lot.limit,
                lot.vacancy
            )?;
        }
        Ok(Flow::Continue)
    }

    fn register_lot(&mut self, desk: &mut ParkingDesk) -> io::Result<Flow> {
        loop {
            let Some(input) = self.prompt("Lot's limit: ")? else {
                return Ok(Flow::Exit);
            };
            match parse_limit(&input).and_then(|limit| desk.assign_parking_lot(limit)) {
                Ok(lot) => {
                    writeln!(
                        self.output,
                        "Lot of {} space(s) is registered successfully!",
                        lot.limit
                    )?;
                    return Ok(Flow::Continue);
                }
                Err(e) => self.report(e)?,
            }
        }
    }

    fn change_style(&mut self, desk: &mut ParkingDesk) -> io::Result<Flow> {
        loop {
            self.display_style_menu()?;
            let Some(input) = self.prompt("Choose a parking style: ")? else {
                return Ok(Flow::Exit);
            };
            match style_from_option(&input) {
                Ok(style) => {
                    desk.set_parking_style(style);
                    writeln!(self.output, "Parking style is set successfully!")?;
                    return Ok(Flow::Continue);
                }
                Err(e) => self.report(e)?,
            }
        }
    }

    fn park(&mut self, desk: &mut ParkingDesk) -> io::Result<Flow> {
        let Some(plate_number) = self.prompt("Car's plate number: ")? else {
            return Ok(Flow::Exit);
        };
        match desk.park(&plate_number) {
            Ok(ticket_id) => writeln!(
                self.output,
                "Car {} is successfully parked with Ticket {}",
                plate_number, ticket_id
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn unpark(&mut self, desk: &mut ParkingDesk) -> io::Result<Flow> {
        let Some(ticket_id) = self.prompt("Ticket ID: ")? else {
            return Ok(Flow::Exit);
        };
        match desk.unpark(&ticket_id) {
            Ok(plate_number) => writeln!(
                self.output,
                "Car {} is successfully unparked with Ticket {}",
                plate_number, ticket_id
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Print a rejected menu input.
    fn report(&mut self, error: ParkingError) -> io::Result<()> {
        metrics::MENU_INPUT_ERRORS
            .with_label_values(&[error.reason()])
            .inc();
        writeln!(self.output, "{}", error)
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
