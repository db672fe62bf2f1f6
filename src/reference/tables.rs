//! Raw table data. Keep entries sorted the way they were collected
//! (by region), not alphabetically, so diffs against the upstream lists
//! stay readable.

/// Country code → continent display name.
pub(crate) const CONTINENTS: &[(&str, &str)] = &[
    ("US", "North America"),
    ("CA", "North America"),
    ("MX", "North America"),
    ("BR", "South America"),
    ("AR", "South America"),
    ("CL", "South America"),
    ("CO", "South America"),
    ("PE", "South America"),
    ("VE", "South America"),
    ("UY", "South America"),
    ("PY", "South America"),
    ("EC", "South America"),
    ("GB", "Europe"),
    ("DE", "Europe"),
    ("FR", "Europe"),
    ("IT", "Europe"),
    ("ES", "Europe"),
    ("NL", "Europe"),
    ("PL", "Europe"),
    ("RU", "Europe"),
    ("NO", "Europe"),
    ("SE", "Europe"),
    ("DK", "Europe"),
    ("FI", "Europe"),
    ("CN", "Asia"),
    ("IN", "Asia"),
    ("JP", "Asia"),
    ("KR", "Asia"),
    ("TH", "Asia"),
    ("ID", "Asia"),
    ("MY", "Asia"),
    ("SG", "Asia"),
    ("PH", "Asia"),
    ("VN", "Asia"),
    ("ZA", "Africa"),
    ("EG", "Africa"),
    ("NG", "Africa"),
    ("KE", "Africa"),
    ("MA", "Africa"),
    ("AU", "Oceania"),
    ("NZ", "Oceania"),
    ("FJ", "Oceania"),
];

/// Country code → display name.
pub(crate) const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("US", "United States of America"),
    ("BR", "Brazil"),
    ("DE", "Germany"),
    ("CN", "China"),
    ("IN", "India"),
    ("ZA", "South Africa"),
    ("AU", "Australia"),
    ("GB", "United Kingdom"),
    ("FR", "France"),
    ("JP", "Japan"),
    ("CA", "Canada"),
    ("MX", "Mexico"),
    ("AR", "Argentina"),
    ("RU", "Russia"),
    ("IT", "Italy"),
    ("ES", "Spain"),
    ("NL", "Netherlands"),
    ("KR", "South Korea"),
    ("NO", "Norway"),
    ("SE", "Sweden"),
    ("DK", "Denmark"),
    ("FI", "Finland"),
];

/// Country code → (currency code, display name, symbol).
pub(crate) const CURRENCIES: &[(&str, &str, &str, &str)] = &[
    ("BR", "BRL", "Brazilian Real", "R$"),
    ("US", "USD", "US Dollar", "$"),
    ("GB", "GBP", "British Pound", "£"),
    ("DE", "EUR", "Euro", "€"),
    ("FR", "EUR", "Euro", "€"),
    ("IT", "EUR", "Euro", "€"),
    ("ES", "EUR", "Euro", "€"),
    ("NL", "EUR", "Euro", "€"),
    ("JP", "JPY", "Japanese Yen", "¥"),
    ("CN", "CNY", "Chinese Yuan", "¥"),
    ("CA", "CAD", "Canadian Dollar", "C$"),
    ("AU", "AUD", "Australian Dollar", "A$"),
    ("IN", "INR", "Indian Rupee", "₹"),
    ("KR", "KRW", "South Korean Won", "₩"),
    ("MX", "MXN", "Mexican Peso", "$"),
    ("AR", "ARS", "Argentine Peso", "$"),
    ("RU", "RUB", "Russian Ruble", "₽"),
    ("SE", "SEK", "Swedish Krona", "kr"),
];

/// Country code → canonical IANA timezone.
/// One representative zone per country; countries spanning several zones get
/// their most populous one.
pub(crate) const TIMEZONES: &[(&str, &str)] = &[
    ("BR", "America/Sao_Paulo"),
    ("US", "America/New_York"),
    ("CA", "America/Toronto"),
    ("MX", "America/Mexico_City"),
    ("AR", "America/Argentina/Buenos_Aires"),
    ("CL", "America/Santiago"),
    ("GB", "Europe/London"),
    ("DE", "Europe/Berlin"),
    ("FR", "Europe/Paris"),
    ("IT", "Europe/Rome"),
    ("ES", "Europe/Madrid"),
    ("NL", "Europe/Amsterdam"),
    ("CN", "Asia/Shanghai"),
    ("JP", "Asia/Tokyo"),
    ("IN", "Asia/Kolkata"),
    ("AU", "Australia/Sydney"),
    ("KR", "Asia/Seoul"),
    ("NO", "Europe/Oslo"),
    ("SE", "Europe/Stockholm"),
    ("DK", "Europe/Copenhagen"),
    ("RU", "Europe/Moscow"),
];
