//! Value objects - Immutable calendar tables and settings

mod cyclic;
mod dina;
mod pasaran;
mod sasi;
mod settings;
mod tahun;

pub use dina::{Dina, Weton, DINA_CYCLE};
pub use pasaran::{Pasaran, PASARAN_CYCLE};
pub use sasi::{Sasi, SASI_IN_TAHUN};
pub use settings::{CalendarSettings, DATE_FORMAT_ENV_VAR, DEFAULT_DATE_FORMAT};
pub use tahun::{Tahun, DAYS_IN_WINDU, EPOCH_YEAR, TAHUN_IN_WINDU};
