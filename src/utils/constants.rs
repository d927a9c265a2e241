/// Bureau endpoints
pub const BOM_BASE_URL: &str = "http://www.bom.gov.au";
pub const CATALOG_PATH: &str = "/jsp/ncc/cdio/weatherData/av";

/// Bureau data file column headers
pub const PRODUCT_CODE_COLUMN: &str = "Product code";
pub const STATION_NUMBER_COLUMN: &str = "Bureau of Meteorology station number";
pub const YEAR_COLUMN: &str = "Year";
pub const MONTH_COLUMN: &str = "Month";
pub const DAY_COLUMN: &str = "Day";

/// Export column headers
pub const STATION_EXPORT_COLUMN: &str = "Station Number";
pub const DATE_EXPORT_COLUMN: &str = "Date";

/// Local artifact naming
pub const ARCHIVE_PREFIX: &str = "station_";
pub const ARCHIVE_EXTENSION: &str = "zip";
pub const DATA_FILE_EXTENSION: &str = "csv";

/// Station catalog defaults
pub const DEFAULT_STATION_COLUMN: &str = "Site";
pub const DEFAULT_STATIONS_FILE: &str = "weather_stations.csv";

/// Fetch defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
