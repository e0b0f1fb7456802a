//! English as used in Niue (`en_NU`).

use crate::data::LocaleData;
use crate::types::PluralCategory::{Few, One, Other, Two};

pub const EN_NU: LocaleData = LocaleData {
    id: "en_NU",
    decimal: ".",
    group: ",",
    minus: "-",
    percent: "%",
    per_mille: "‰",
    infinity: "∞",
    time_separator: ":",
    plurals_cardinal: &[One, Other],
    plurals_ordinal: &[One, Two, Few, Other],
    plurals_range: &[Other],
    cardinal_rules: Some(&[
        (One, "i = 1 and v = 0"),
    ]),
    ordinal_rules: Some(&[
        (One, "n % 10 = 1 and n % 100 != 11"),
        (Two, "n % 10 = 2 and n % 100 != 12"),
        (Few, "n % 10 = 3 and n % 100 != 13"),
    ]),
    range_rules: Some(&[]),
    number_pattern: "#,##0.###",
    percent_pattern: "#0%",
    currency_pattern: "¤#,##0.00",
    accounting_pattern: "¤#,##0.00;(¤#,##0.00)",
    date_short: "dd/MM/y",
    date_medium: "d MMM y",
    date_long: "d MMMM y",
    date_full: "EEEE, d MMMM y",
    time_short: "HH:mm",
    time_medium: "HH:mm:ss",
    time_long: "HH:mm:ss z",
    time_full: "HH:mm:ss zzzz",
    months_abbreviated: &[
        "",
        "Jan",
        "Feb",
        "Mar",
        "Apr",
        "May",
        "Jun",
        "Jul",
        "Aug",
        "Sep",
        "Oct",
        "Nov",
        "Dec",
    ],
    months_narrow: &["", "J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    months_wide: &[
        "",
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    weekdays_abbreviated: &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    weekdays_narrow: &["S", "M", "T", "W", "T", "F", "S"],
    weekdays_short: &["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    weekdays_wide: &["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    periods_abbreviated: &["am", "pm"],
    periods_narrow: &["a", "p"],
    periods_wide: &["am", "pm"],
    eras_abbreviated: &["BC", "AD"],
    eras_narrow: &["B", "A"],
    eras_wide: &["Before Christ", "Anno Domini"],
    timezones: &[
        ("ACDT", "Australian Central Daylight Time"),
        ("ACST", "Australian Central Standard Time"),
        ("ACWDT", "Australian Central Western Daylight Time"),
        ("ACWST", "Australian Central Western Standard Time"),
        ("ADT", "Atlantic Daylight Time"),
        ("AEDT", "Australian Eastern Daylight Time"),
        ("AEST", "Australian Eastern Standard Time"),
        ("AKDT", "Alaska Daylight Time"),
        ("AKST", "Alaska Standard Time"),
        ("ARST", "Argentina Summer Time"),
        ("ART", "Argentina Standard Time"),
        ("AST", "Atlantic Standard Time"),
        ("AWDT", "Australian Western Daylight Time"),
        ("AWST", "Australian Western Standard Time"),
        ("BOT", "Bolivia Time"),
        ("BT", "Bhutan Time"),
        ("CAT", "Central Africa Time"),
        ("CDT", "Central Daylight Time"),
        ("CHADT", "Chatham Daylight Time"),
        ("CHAST", "Chatham Standard Time"),
        ("CLST", "Chile Summer Time"),
        ("CLT", "Chile Standard Time"),
        ("COST", "Colombia Summer Time"),
        ("COT", "Colombia Standard Time"),
        ("CST", "Central Standard Time"),
        ("ChST", "Chamorro Standard Time"),
        ("EAT", "East Africa Time"),
        ("ECT", "Ecuador Time"),
        ("EDT", "Eastern Daylight Time"),
        ("EST", "Eastern Standard Time"),
        ("GFT", "French Guiana Time"),
        ("GMT", "Greenwich Mean Time"),
        ("GYT", "Guyana Time"),
        ("HADT", "Hawaii-Aleutian Daylight Time"),
        ("HAST", "Hawaii-Aleutian Standard Time"),
        ("HAT", "Newfoundland Daylight Time"),
        ("HECU", "Cuba Daylight Time"),
        ("HEEG", "East Greenland Summer Time"),
        ("HENOMX", "Northwest Mexico Daylight Time"),
        ("HEOG", "West Greenland Summer Time"),
        ("HEPM", "St. Pierre & Miquelon Daylight Time"),
        ("HEPMX", "Mexican Pacific Daylight Time"),
        ("HKST", "Hong Kong Summer Time"),
        ("HKT", "Hong Kong Standard Time"),
        ("HNCU", "Cuba Standard Time"),
        ("HNEG", "East Greenland Standard Time"),
        ("HNNOMX", "Northwest Mexico Standard Time"),
        ("HNOG", "West Greenland Standard Time"),
        ("HNPM", "St. Pierre & Miquelon Standard Time"),
        ("HNPMX", "Mexican Pacific Standard Time"),
        ("HNT", "Newfoundland Standard Time"),
        ("IST", "India Standard Time"),
        ("JDT", "Japan Daylight Time"),
        ("JST", "Japan Standard Time"),
        ("LHDT", "Lord Howe Daylight Time"),
        ("LHST", "Lord Howe Standard Time"),
        ("MDT", "Macau Summer Time"),
        ("MESZ", "Central European Summer Time"),
        ("MEZ", "Central European Standard Time"),
        ("MST", "Macau Standard Time"),
        ("MYT", "Malaysia Time"),
        ("NZDT", "New Zealand Daylight Time"),
        ("NZST", "New Zealand Standard Time"),
        ("OESZ", "Eastern European Summer Time"),
        ("OEZ", "Eastern European Standard Time"),
        ("PDT", "Pacific Daylight Time"),
        ("PST", "Pacific Standard Time"),
        ("SAST", "South Africa Standard Time"),
        ("SGT", "Singapore Standard Time"),
        ("SRT", "Suriname Time"),
        ("TMST", "Turkmenistan Summer Time"),
        ("TMT", "Turkmenistan Standard Time"),
        ("UYST", "Uruguay Summer Time"),
        ("UYT", "Uruguay Standard Time"),
        ("VET", "Venezuela Time"),
        ("WARST", "Western Argentina Summer Time"),
        ("WART", "Western Argentina Standard Time"),
        ("WAST", "West Africa Summer Time"),
        ("WAT", "West Africa Standard Time"),
        ("WESZ", "Western European Summer Time"),
        ("WEZ", "Western European Standard Time"),
        ("WIB", "Western Indonesia Time"),
        ("WIT", "Eastern Indonesia Time"),
        ("WITA", "Central Indonesia Time"),
        ("∅∅∅", "Brasilia Summer Time"),
    ],
    currency_symbols: &[
        "ADP",
        "AED",
        "AFA",
        "AFN",
        "ALK",
        "ALL",
        "AMD",
        "ANG",
        "AOA",
        "AOK",
        "AON",
        "AOR",
        "ARA",
        "ARL",
        "ARM",
        "ARP",
        "ARS",
        "ATS",
        "AUD",
        "AWG",
        "AZM",
        "AZN",
        "BAD",
        "BAM",
        "BAN",
        "BBD",
        "BDT",
        "BEC",
        "BEF",
        "BEL",
        "BGL",
        "BGM",
        "BGN",
        "BGO",
        "BHD",
        "BIF",
        "BMD",
        "BND",
        "BOB",
        "BOL",
        "BOP",
        "BOV",
        "BRB",
        "BRC",
        "BRE",
        "BRL",
        "BRN",
        "BRR",
        "BRZ",
        "BSD",
        "BTN",
        "BUK",
        "BWP",
        "BYB",
        "BYN",
        "BYR",
        "BZD",
        "CAD",
        "CDF",
        "CHE",
        "CHF",
        "CHW",
        "CLE",
        "CLF",
        "CLP",
        "CNX",
        "CNY",
        "COP",
        "COU",
        "CRC",
        "CSD",
        "CSK",
        "CUC",
        "CUP",
        "CVE",
        "CYP",
        "CZK",
        "DDM",
        "DEM",
        "DJF",
        "DKK",
        "DOP",
        "DZD",
        "ECS",
        "ECV",
        "EEK",
        "EGP",
        "ERN",
        "ESA",
        "ESB",
        "ESP",
        "ETB",
        "EUR",
        "FIM",
        "FJD",
        "FKP",
        "FRF",
        "GBP",
        "GEK",
        "GEL",
        "GHC",
        "GHS",
        "GIP",
        "GMD",
        "GNF",
        "GNS",
        "GQE",
        "GRD",
        "GTQ",
        "GWE",
        "GWP",
        "GYD",
        "HKD",
        "HNL",
        "HRD",
        "HRK",
        "HTG",
        "HUF",
        "IDR",
        "IEP",
        "ILP",
        "ILR",
        "ILS",
        "INR",
        "IQD",
        "IRR",
        "ISJ",
        "ISK",
        "ITL",
        "JMD",
        "JOD",
        "JPY",
        "KES",
        "KGS",
        "KHR",
        "KMF",
        "KPW",
        "KRH",
        "KRO",
        "KRW",
        "KWD",
        "KYD",
        "KZT",
        "LAK",
        "LBP",
        "LKR",
        "LRD",
        "LSL",
        "LTL",
        "LTT",
        "LUC",
        "LUF",
        "LUL",
        "LVL",
        "LVR",
        "LYD",
        "MAD",
        "MAF",
        "MCF",
        "MDC",
        "MDL",
        "MGA",
        "MGF",
        "MKD",
        "MKN",
        "MLF",
        "MMK",
        "MNT",
        "MOP",
        "MRO",
        "MTL",
        "MTP",
        "MUR",
        "MVP",
        "MVR",
        "MWK",
        "MXN",
        "MXP",
        "MXV",
        "MYR",
        "MZE",
        "MZM",
        "MZN",
        "NAD",
        "NGN",
        "NIC",
        "NIO",
        "NLG",
        "NOK",
        "NPR",
        "$",
        "OMR",
        "PAB",
        "PEI",
        "PEN",
        "PES",
        "PGK",
        "PHP",
        "PKR",
        "PLN",
        "PLZ",
        "PTE",
        "PYG",
        "QAR",
        "RHD",
        "ROL",
        "RON",
        "RSD",
        "RUB",
        "RUR",
        "RWF",
        "SAR",
        "SBD",
        "SCR",
        "SDD",
        "SDG",
        "SDP",
        "SEK",
        "SGD",
        "SHP",
        "SIT",
        "SKK",
        "SLL",
        "SOS",
        "SRD",
        "SRG",
        "SSP",
        "STD",
        "SUR",
        "SVC",
        "SYP",
        "SZL",
        "THB",
        "TJR",
        "TJS",
        "TMM",
        "TMT",
        "TND",
        "TOP",
        "TPE",
        "TRL",
        "TRY",
        "TTD",
        "TWD",
        "TZS",
        "UAH",
        "UAK",
        "UGS",
        "UGX",
        "USD",
        "USN",
        "USS",
        "UYI",
        "UYP",
        "UYU",
        "UZS",
        "VEB",
        "VEF",
        "VND",
        "VNN",
        "VUV",
        "WST",
        "XAF",
        "XAG",
        "XAU",
        "XBA",
        "XBB",
        "XBC",
        "XBD",
        "XCD",
        "XDR",
        "XEU",
        "XFO",
        "XFU",
        "XOF",
        "XPD",
        "XPF",
        "XPT",
        "XRE",
        "XSU",
        "XTS",
        "XUA",
        "XXX",
        "YDD",
        "YER",
        "YUD",
        "YUM",
        "YUN",
        "YUR",
        "ZAL",
        "ZAR",
        "ZMK",
        "ZMW",
        "ZRN",
        "ZRZ",
        "ZWD",
        "ZWL",
        "ZWR",
    ],
};
