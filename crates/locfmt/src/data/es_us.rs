//! Spanish as used in the United States (`es_US`).

use crate::data::LocaleData;
use crate::types::PluralCategory::{One, Other};

pub const ES_US: LocaleData = LocaleData {
    id: "es_US",
    decimal: ",",
    group: ".",
    minus: "-",
    percent: "%",
    per_mille: "‰",
    infinity: "∞",
    time_separator: ":",
    plurals_cardinal: &[One, Other],
    plurals_ordinal: &[Other],
    plurals_range: &[Other],
    cardinal_rules: Some(&[
        (One, "n = 1"),
    ]),
    ordinal_rules: Some(&[]),
    range_rules: Some(&[]),
    number_pattern: "#,##0.###",
    percent_pattern: "#0\u{a0}%",
    currency_pattern: "#,##0.00\u{a0}¤",
    accounting_pattern: "#,##0.00\u{a0}¤",
    date_short: "d/M/yy",
    date_medium: "d MMM y",
    date_long: "d 'de' MMMM 'de' y",
    date_full: "EEEE, d 'de' MMMM 'de' y",
    time_short: "h:mm a",
    time_medium: "h:mm:ss a",
    time_long: "h:mm:ss a z",
    time_full: "h:mm:ss a zzzz",
    months_abbreviated: &[
        "",
        "ene.",
        "feb.",
        "mar.",
        "abr.",
        "may.",
        "jun.",
        "jul.",
        "ago.",
        "sept.",
        "oct.",
        "nov.",
        "dic.",
    ],
    months_narrow: &["", "E", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    months_wide: &[
        "",
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    weekdays_abbreviated: &["dom.", "lun.", "mar.", "mié.", "jue.", "vie.", "sáb."],
    weekdays_narrow: &["D", "L", "M", "X", "J", "V", "S"],
    weekdays_short: &["DO", "LU", "MA", "MI", "JU", "VI", "SA"],
    weekdays_wide: &["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"],
    periods_abbreviated: &["a. m.", "p. m."],
    periods_narrow: &["", ""],
    periods_wide: &["a. m.", "p. m."],
    eras_abbreviated: &["a. C.", "d. C."],
    eras_narrow: &["", ""],
    eras_wide: &["antes de Cristo", "después de Cristo"],
    timezones: &[
        ("ACDT", "hora de verano de Australia central"),
        ("ACST", "hora estándar de Australia central"),
        ("ACWDT", "hora de verano de Australia centroccidental"),
        ("ACWST", "hora estándar de Australia centroccidental"),
        ("ADT", "hora de verano del Atlántico"),
        ("AEDT", "hora de verano de Australia oriental"),
        ("AEST", "hora estándar de Australia oriental"),
        ("AKDT", "hora de verano de Alaska"),
        ("AKST", "hora estándar de Alaska"),
        ("ARST", "hora de verano de Argentina"),
        ("ART", "hora estándar de Argentina"),
        ("AST", "hora estándar del Atlántico"),
        ("AWDT", "hora de verano de Australia occidental"),
        ("AWST", "hora estándar de Australia occidental"),
        ("BOT", "hora de Bolivia"),
        ("BT", "hora de Bután"),
        ("CAT", "hora de África central"),
        ("CDT", "hora de verano central"),
        ("CHADT", "hora de verano de Chatham"),
        ("CHAST", "hora estándar de Chatham"),
        ("CLST", "hora de verano de Chile"),
        ("CLT", "hora estándar de Chile"),
        ("COST", "hora de verano de Colombia"),
        ("COT", "hora estándar de Colombia"),
        ("CST", "hora estándar central"),
        ("ChST", "hora de Chamorro"),
        ("EAT", "hora de África oriental"),
        ("ECT", "hora de Ecuador"),
        ("EDT", "hora de verano oriental"),
        ("EST", "hora estándar oriental"),
        ("GFT", "hora de la Guayana Francesa"),
        ("GMT", "hora del meridiano de Greenwich"),
        ("GYT", "hora de Guyana"),
        ("HADT", "hora de verano de Hawái-Aleutiano"),
        ("HAST", "hora estándar de Hawái-Aleutiano"),
        ("HAT", "hora de verano de Terranova"),
        ("HECU", "hora de verano de Cuba"),
        ("HEEG", "hora de verano de Groenlandia oriental"),
        ("HENOMX", "hora de verano del noroeste de México"),
        ("HEOG", "hora de verano de Groenlandia occidental"),
        ("HEPM", "hora de verano de San Pedro y Miquelón"),
        ("HEPMX", "hora de verano del Pacífico de México"),
        ("HKST", "hora de verano de Hong Kong"),
        ("HKT", "hora estándar de Hong Kong"),
        ("HNCU", "hora estándar de Cuba"),
        ("HNEG", "hora estándar de Groenlandia oriental"),
        ("HNNOMX", "hora estándar del noroeste de México"),
        ("HNOG", "hora estándar de Groenlandia occidental"),
        ("HNPM", "hora estándar de San Pedro y Miquelón"),
        ("HNPMX", "hora estándar del Pacífico de México"),
        ("HNT", "hora estándar de Terranova"),
        ("IST", "hora estándar de la India"),
        ("JDT", "hora de verano de Japón"),
        ("JST", "hora estándar de Japón"),
        ("LHDT", "hora de verano de Lord Howe"),
        ("LHST", "hora estándar de Lord Howe"),
        ("MDT", "hora de verano de las Montañas"),
        ("MESZ", "hora de verano de Europa central"),
        ("MEZ", "hora estándar de Europa central"),
        ("MST", "hora estándar de las Montañas"),
        ("MYT", "hora de Malasia"),
        ("NZDT", "hora de verano de Nueva Zelanda"),
        ("NZST", "hora estándar de Nueva Zelanda"),
        ("OESZ", "hora de verano de Europa oriental"),
        ("OEZ", "hora estándar de Europa oriental"),
        ("PDT", "hora de verano del Pacífico"),
        ("PST", "hora estándar del Pacífico"),
        ("SAST", "hora de Sudáfrica"),
        ("SGT", "hora de Singapur"),
        ("SRT", "hora de Surinam"),
        ("TMST", "hora de verano de Turkmenistán"),
        ("TMT", "hora estándar de Turkmenistán"),
        ("UYST", "hora de verano de Uruguay"),
        ("UYT", "hora estándar de Uruguay"),
        ("VET", "hora de Venezuela"),
        ("WARST", "hora de verano de Argentina occidental"),
        ("WART", "hora estándar de Argentina occidental"),
        ("WAST", "hora de verano de África occidental"),
        ("WAT", "hora estándar de África occidental"),
        ("WESZ", "hora de verano de Europa occidental"),
        ("WEZ", "hora estándar de Europa occidental"),
        ("WIB", "hora de Indonesia occidental"),
        ("WIT", "hora de Indonesia oriental"),
        ("WITA", "hora de Indonesia central"),
        ("∅∅∅", "hora de verano de las Azores"),
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
        "¥",
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
        "NZD",
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
        "lei",
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
        "$",
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
