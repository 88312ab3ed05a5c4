pub mod config;
pub mod metrics;
pub mod parking;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, Config,
    ConfigError, LogFormat, LoggingConfig, MetricsConfig, ParkingConfig,
};
pub use parking::{
    Attendant, Car, CarId, Lot, LotId, LotObserver, ParkingError, ParkingStyle, Publisher,
    Ticket, TicketId,
};
