//! Bafia as used in Cameroon (`ksf_CM`).

use crate::data::LocaleData;

pub const KSF_CM: LocaleData = LocaleData {
    id: "ksf_CM",
    decimal: ",",
    group: "\u{a0}",
    minus: "",
    percent: "",
    per_mille: "",
    infinity: "",
    time_separator: ":",
    plurals_cardinal: &[],
    plurals_ordinal: &[],
    plurals_range: &[],
    cardinal_rules: None,
    ordinal_rules: None,
    range_rules: None,
    number_pattern: "#,##0.###",
    percent_pattern: "#0",
    currency_pattern: "#,##0.00\u{a0}¤",
    accounting_pattern: "#,##0.00\u{a0}¤",
    date_short: "d/M/y",
    date_medium: "d MMM y",
    date_long: "d MMMM y",
    date_full: "EEEE d MMMM y",
    time_short: "HH:mm",
    time_medium: "HH:mm:ss",
    time_long: "HH:mm:ss z",
    time_full: "HH:mm:ss zzzz",
    months_abbreviated: &[
        "",
        "ŋ1",
        "ŋ2",
        "ŋ3",
        "ŋ4",
        "ŋ5",
        "ŋ6",
        "ŋ7",
        "ŋ8",
        "ŋ9",
        "ŋ10",
        "ŋ11",
        "ŋ12",
    ],
    months_narrow: &[],
    months_wide: &[
        "",
        "ŋwíí a ntɔ\u{301}ntɔ",
        "ŋwíí akǝ bɛ\u{301}ɛ",
        "ŋwíí akǝ ráá",
        "ŋwíí akǝ nin",
        "ŋwíí akǝ táan",
        "ŋwíí akǝ táafɔk",
        "ŋwíí akǝ táabɛɛ",
        "ŋwíí akǝ táaraa",
        "ŋwíí akǝ táanin",
        "ŋwíí akǝ ntɛk",
        "ŋwíí akǝ ntɛk di bɔ\u{301}k",
        "ŋwíí akǝ ntɛk di bɛ\u{301}ɛ",
    ],
    weekdays_abbreviated: &["sɔ\u{301}n", "lǝn", "maa", "mɛk", "jǝǝ", "júm", "sam"],
    weekdays_narrow: &["s", "l", "m", "m", "j", "j", "s"],
    weekdays_short: &[],
    weekdays_wide: &["sɔ\u{301}ndǝ", "lǝndí", "maadí", "mɛkrɛdí", "jǝǝdí", "júmbá", "samdí"],
    periods_abbreviated: &["sárúwá", "cɛɛ\u{301}nko"],
    periods_narrow: &[],
    periods_wide: &["sárúwá", "cɛɛ\u{301}nko"],
    eras_abbreviated: &["d.Y.", "k.Y."],
    eras_narrow: &["", ""],
    eras_wide: &["di Yɛ\u{301}sus aká yálɛ", "cámɛɛn kǝ kǝbɔpka Y"],
    timezones: &[
        ("ACDT", "ACDT"),
        ("ACST", "ACST"),
        ("ACWDT", "ACWDT"),
        ("ACWST", "ACWST"),
        ("ADT", "ADT"),
        ("AEDT", "AEDT"),
        ("AEST", "AEST"),
        ("AKDT", "AKDT"),
        ("AKST", "AKST"),
        ("ARST", "ARST"),
        ("ART", "ART"),
        ("AST", "AST"),
        ("AWDT", "AWDT"),
        ("AWST", "AWST"),
        ("BOT", "BOT"),
        ("BT", "BT"),
        ("CAT", "CAT"),
        ("CDT", "CDT"),
        ("CHADT", "CHADT"),
        ("CHAST", "CHAST"),
        ("CLST", "CLST"),
        ("CLT", "CLT"),
        ("COST", "COST"),
        ("COT", "COT"),
        ("CST", "CST"),
        ("ChST", "ChST"),
        ("EAT", "EAT"),
        ("ECT", "ECT"),
        ("EDT", "EDT"),
        ("EST", "EST"),
        ("GFT", "GFT"),
        ("GMT", "GMT"),
        ("GYT", "GYT"),
        ("HADT", "HADT"),
        ("HAST", "HAST"),
        ("HAT", "HAT"),
        ("HECU", "HECU"),
        ("HEEG", "HEEG"),
        ("HENOMX", "HENOMX"),
        ("HEOG", "HEOG"),
        ("HEPM", "HEPM"),
        ("HEPMX", "HEPMX"),
        ("HKST", "HKST"),
        ("HKT", "HKT"),
        ("HNCU", "HNCU"),
        ("HNEG", "HNEG"),
        ("HNNOMX", "HNNOMX"),
        ("HNOG", "HNOG"),
        ("HNPM", "HNPM"),
        ("HNPMX", "HNPMX"),
        ("HNT", "HNT"),
        ("IST", "IST"),
        ("JDT", "JDT"),
        ("JST", "JST"),
        ("LHDT", "LHDT"),
        ("LHST", "LHST"),
        ("MDT", "MDT"),
        ("MESZ", "MESZ"),
        ("MEZ", "MEZ"),
        ("MST", "MST"),
        ("MYT", "MYT"),
        ("NZDT", "NZDT"),
        ("NZST", "NZST"),
        ("OESZ", "OESZ"),
        ("OEZ", "OEZ"),
        ("PDT", "PDT"),
        ("PST", "PST"),
        ("SAST", "SAST"),
        ("SGT", "SGT"),
        ("SRT", "SRT"),
        ("TMST", "TMST"),
        ("TMT", "TMT"),
        ("UYST", "UYST"),
        ("UYT", "UYT"),
        ("VET", "VET"),
        ("WARST", "WARST"),
        ("WART", "WART"),
        ("WAST", "WAST"),
        ("WAT", "WAT"),
        ("WESZ", "WESZ"),
        ("WEZ", "WEZ"),
        ("WIB", "WIB"),
        ("WIT", "WIT"),
        ("WITA", "WITA"),
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
