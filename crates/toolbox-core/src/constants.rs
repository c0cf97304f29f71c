/// Settings key holding a date pattern such as `yyyy-MM-dd`
pub const DATE_FORMAT_KEYWORD: &str = "dateFormat";

/// Settings key holding an already translated strftime layout
pub const DATE_LAYOUT_KEYWORD: &str = "dateLayout";

/// Scheme served by the local filesystem backend
pub const FILE_SCHEME: &str = "file";

/// Scheme served by the in-memory backend
pub const MEMORY_SCHEME: &str = "mem";

/// Built-in provider: environment variable lookup
pub const ENV_PROVIDER: &str = "env";

/// Built-in provider: type cast
pub const CAST_PROVIDER: &str = "cast";

/// Built-in provider: current time
pub const NOW_PROVIDER: &str = "now";

/// Built-in provider: relative time arithmetic
pub const TIME_DIFF_PROVIDER: &str = "time_diff";

/// Built-in provider: current weekday
pub const WEEKDAY_PROVIDER: &str = "weekday";

/// Built-in provider: current date as `yyyymmdd`
pub const CURRENT_DATE_PROVIDER: &str = "current_date";

/// Built-in provider: null value
pub const NIL_PROVIDER: &str = "nil";

/// Conventional name and context key for a dictionary-backed provider
pub const DICTIONARY_PROVIDER: &str = "dictionary";
