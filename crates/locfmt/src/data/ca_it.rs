//! Catalan as used in Italy (`ca_IT`).

use crate::data::LocaleData;
use crate::types::PluralCategory::{Few, One, Other, Two};

pub const CA_IT: LocaleData = LocaleData {
    id: "ca_IT",
    decimal: ",",
    group: ".",
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
        (One, "n = 1,3"),
        (Two, "n = 2"),
        (Few, "n = 4"),
    ]),
    range_rules: Some(&[]),
    number_pattern: "#,##0.###",
    percent_pattern: "#0%",
    currency_pattern: "#,##0.00\u{a0}¤",
    accounting_pattern: "#,##0.00\u{a0}¤;(#,##0.00\u{a0})¤",
    date_short: "d/M/yy",
    date_medium: "d MMM y",
    date_long: "d MMMM 'de' y",
    date_full: "EEEE, d MMMM 'de' y",
    time_short: "H:mm",
    time_medium: "H:mm:ss",
    time_long: "H:mm:ss z",
    time_full: "H:mm:ss zzzz",
    months_abbreviated: &[
        "",
        "de gen.",
        "de febr.",
        "de març",
        "d’abr.",
        "de maig",
        "de juny",
        "de jul.",
        "d’ag.",
        "de set.",
        "d’oct.",
        "de nov.",
        "de des.",
    ],
    months_narrow: &["", "GN", "FB", "MÇ", "AB", "MG", "JN", "JL", "AG", "ST", "OC", "NV", "DS"],
    months_wide: &[
        "",
        "de gener",
        "de febrer",
        "de març",
        "d’abril",
        "de maig",
        "de juny",
        "de juliol",
        "d’agost",
        "de setembre",
        "d’octubre",
        "de novembre",
        "de desembre",
    ],
    weekdays_abbreviated: &["dg.", "dl.", "dt.", "dc.", "dj.", "dv.", "ds."],
    weekdays_narrow: &["dg", "dl", "dt", "dc", "dj", "dv", "ds"],
    weekdays_short: &["dg.", "dl.", "dt.", "dc.", "dj.", "dv.", "ds."],
    weekdays_wide: &[
        "diumenge",
        "dilluns",
        "dimarts",
        "dimecres",
        "dijous",
        "divendres",
        "dissabte",
    ],
    periods_abbreviated: &["a. m.", "p. m."],
    periods_narrow: &["a. m.", "p. m."],
    periods_wide: &["a. m.", "p. m."],
    eras_abbreviated: &["aC", "dC"],
    eras_narrow: &["aC", "dC"],
    eras_wide: &["abans de Crist", "després de Crist"],
    timezones: &[
        ("ACDT", "Hora d’estiu d’Austràlia Central"),
        ("ACST", "Hora estàndard d’Austràlia Central"),
        ("ACWDT", "Hora d’estiu d’Austràlia centre-occidental"),
        ("ACWST", "Hora estàndard d’Austràlia centre-occidental"),
        ("ADT", "Hora d’estiu de l’Atlàntic"),
        ("AEDT", "Hora d’estiu d’Austràlia Oriental"),
        ("AEST", "Hora estàndard d’Austràlia Oriental"),
        ("AKDT", "Hora d’estiu d’Alaska"),
        ("AKST", "Hora estàndard d’Alaska"),
        ("ARST", "Hora d’estiu de l’Argentina"),
        ("ART", "Hora estàndard de l’Argentina"),
        ("AST", "Hora estàndard de l’Atlàntic"),
        ("AWDT", "Hora d’estiu d’Austràlia Occidental"),
        ("AWST", "Hora estàndard d’Austràlia Occidental"),
        ("BOT", "Hora de Bolívia"),
        ("BT", "Hora de Bhutan"),
        ("CAT", "Hora de l’Àfrica Central"),
        ("CDT", "Hora d’estiu central d’Amèrica del Nord"),
        ("CHADT", "Hora d’estiu de Chatham"),
        ("CHAST", "Hora estàndard de Chatham"),
        ("CLST", "Hora d’estiu de Xile"),
        ("CLT", "Hora estàndard de Xile"),
        ("COST", "Hora d’estiu de Colòmbia"),
        ("COT", "Hora estàndard de Colòmbia"),
        ("CST", "Hora estàndard central d’Amèrica del Nord"),
        ("ChST", "Hora de Chamorro"),
        ("EAT", "Hora de l’Àfrica Oriental"),
        ("ECT", "Hora de l’Equador"),
        ("EDT", "Hora d’estiu oriental d’Amèrica del Nord"),
        ("EST", "Hora estàndard oriental d’Amèrica del Nord"),
        ("GFT", "Hora de la Guaiana Francesa"),
        ("GMT", "Hora del Meridià de Greenwich"),
        ("GYT", "Hora de Guyana"),
        ("HADT", "Hora d’estiu de Hawaii-Aleutianes"),
        ("HAST", "Hora estàndard de Hawaii-Aleutianes"),
        ("HAT", "Hora d’estiu de Terranova"),
        ("HECU", "Hora d’estiu de Cuba"),
        ("HEEG", "Hora d’estiu de l’Est de Grenlàndia"),
        ("HENOMX", "Hora d’estiu del nord-oest de Mèxic"),
        ("HEOG", "Hora d’estiu de l’Oest de Grenlàndia"),
        ("HEPM", "Hora d’estiu de Saint-Pierre i Miquelon"),
        ("HEPMX", "Hora d’estiu del Pacífic de Mèxic"),
        ("HKST", "Hora d’estiu de Hong Kong"),
        ("HKT", "Hora estàndard de Hong Kong"),
        ("HNCU", "Hora estàndard de Cuba"),
        ("HNEG", "Hora estàndard de l’Est de Grenlàndia"),
        ("HNNOMX", "Hora estàndard del nord-oest de Mèxic"),
        ("HNOG", "Hora estàndard de l’Oest de Grenlàndia"),
        ("HNPM", "Hora estàndard de Saint-Pierre i Miquelon"),
        ("HNPMX", "Hora estàndard del Pacífic de Mèxic"),
        ("HNT", "Hora estàndard de Terranova"),
        ("IST", "Hora estàndard de l’Índia"),
        ("JDT", "Hora d’estiu del Japó"),
        ("JST", "Hora estàndard del Japó"),
        ("LHDT", "Horari d’estiu de Lord Howe"),
        ("LHST", "Hora estàndard de Lord Howe"),
        ("MDT", "Hora d’estiu de muntanya d’Amèrica del Nord"),
        ("MESZ", "Hora d’estiu del Centre d’Europa"),
        ("MEZ", "Hora estàndard del Centre d’Europa"),
        ("MST", "Hora estàndard de muntanya d’Amèrica del Nord"),
        ("MYT", "Hora de Malàisia"),
        ("NZDT", "Hora d’estiu de Nova Zelanda"),
        ("NZST", "Hora estàndard de Nova Zelanda"),
        ("OESZ", "Hora d’estiu de l’Est d’Europa"),
        ("OEZ", "Hora estàndard de l’Est d’Europa"),
        ("PDT", "Hora d’estiu del Pacífic"),
        ("PST", "Hora estàndard del Pacífic"),
        ("SAST", "Hora estàndard del sud de l’Àfrica"),
        ("SGT", "Hora de Singapur"),
        ("SRT", "Hora de Surinam"),
        ("TMST", "Hora d’estiu del Turkmenistan"),
        ("TMT", "Hora estàndard del Turkmenistan"),
        ("UYST", "Hora d’estiu de l’Uruguai"),
        ("UYT", "Hora estàndard de l’Uruguai"),
        ("VET", "Hora de Veneçuela"),
        ("WARST", "Hora d’estiu de l’oest de l’Argentina"),
        ("WART", "Hora estàndard de l’oest de l’Argentina"),
        ("WAST", "Hora d’estiu de l’Àfrica Occidental"),
        ("WAT", "Hora estàndard de l’Àfrica Occidental"),
        ("WESZ", "Hora d’estiu de l’Oest d’Europa"),
        ("WEZ", "Hora estàndard de l’Oest d’Europa"),
        ("WIB", "Hora de l’oest d’Indonèsia"),
        ("WIT", "Hora de l’est d’Indonèsia"),
        ("WITA", "Hora central d’Indonèsia"),
        ("∅∅∅", "∅∅∅"),
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
