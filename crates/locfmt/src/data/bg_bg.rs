//! Bulgarian as used in Bulgaria (`bg_BG`).

use crate::data::LocaleData;
use crate::types::PluralCategory::{One, Other};

pub const BG_BG: LocaleData = LocaleData {
    id: "bg_BG",
    decimal: ",",
    group: "\u{a0}",
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
    percent_pattern: "#0%",
    currency_pattern: "#0.00\u{a0}¤",
    accounting_pattern: "#0.00\u{a0}¤;(#0.00\u{a0})¤",
    date_short: "d.MM.yy 'г.'",
    date_medium: "d.MM.y 'г.'",
    date_long: "d MMMM y 'г.'",
    date_full: "EEEE, d MMMM y 'г.'",
    time_short: "H:mm",
    time_medium: "H:mm:ss",
    time_long: "H:mm:ss z",
    time_full: "H:mm:ss zzzz",
    months_abbreviated: &[
        "",
        "яну",
        "фев",
        "март",
        "апр",
        "май",
        "юни",
        "юли",
        "авг",
        "сеп",
        "окт",
        "ное",
        "дек",
    ],
    months_narrow: &["", "я", "ф", "м", "а", "м", "ю", "ю", "а", "с", "о", "н", "д"],
    months_wide: &[
        "",
        "януари",
        "февруари",
        "март",
        "април",
        "май",
        "юни",
        "юли",
        "август",
        "септември",
        "октомври",
        "ноември",
        "декември",
    ],
    weekdays_abbreviated: &["нд", "пн", "вт", "ср", "чт", "пт", "сб"],
    weekdays_narrow: &["н", "п", "в", "с", "ч", "п", "с"],
    weekdays_short: &["нд", "пн", "вт", "ср", "чт", "пт", "сб"],
    weekdays_wide: &["неделя", "понеделник", "вторник", "сряда", "четвъртък", "петък", "събота"],
    periods_abbreviated: &["am", "pm"],
    periods_narrow: &["am", "pm"],
    periods_wide: &["пр.об.", "сл.об."],
    eras_abbreviated: &["пр.Хр.", "сл.Хр."],
    eras_narrow: &["", ""],
    eras_wide: &["преди Христа", "след Христа"],
    timezones: &[
        ("ACDT", "Австралия – централно лятно часово време"),
        ("ACST", "Австралия – централно стандартно време"),
        ("ACWDT", "Австралия – западно централно лятно часово време"),
        ("ACWST", "Австралия – западно централно стандартно време"),
        ("ADT", "Северноамериканско атлантическо лятно часово време"),
        ("AEDT", "Австралия – източно лятно часово време"),
        ("AEST", "Австралия – източно стандартно време"),
        ("AKDT", "Аляска – лятно часово време"),
        ("AKST", "Аляска – стандартно време"),
        ("ARST", "Аржентинско лятно часово време"),
        ("ART", "Аржентинско стандартно време"),
        ("AST", "Северноамериканско атлантическо стандартно време"),
        ("AWDT", "Австралия – западно лятно часово време"),
        ("AWST", "Австралия – западно стандартно време"),
        ("BOT", "Боливийско време"),
        ("BT", "Бутанско време"),
        ("CAT", "Централноафриканско време"),
        ("CDT", "Северноамериканско централно лятно часово време"),
        ("CHADT", "Чатъм – лятно часово време"),
        ("CHAST", "Чатъм – стандартно време"),
        ("CLST", "Чилийско лятно часово време"),
        ("CLT", "Чилийско стандартно време"),
        ("COST", "Колумбийско лятно часово време"),
        ("COT", "Колумбийско стандартно време"),
        ("CST", "Северноамериканско централно стандартно време"),
        ("ChST", "Чаморо – стандартно време"),
        ("EAT", "Източноафриканско време"),
        ("ECT", "Еквадорско време"),
        ("EDT", "Северноамериканско източно лятно часово време"),
        ("EST", "Северноамериканско източно стандартно време"),
        ("GFT", "Френска Гвиана"),
        ("GMT", "Средно гринуичко време"),
        ("GYT", "Гаяна"),
        ("HADT", "Хавайско-алеутско лятно часово време"),
        ("HAST", "Хавайско-алеутско стандартно време"),
        ("HAT", "Нюфаундлендско лятно часово време"),
        ("HECU", "Кубинско лятно часово време"),
        ("HEEG", "Източногренландско лятно часово време"),
        ("HENOMX", "Мексико – северозападно лятно часово време"),
        ("HEOG", "Западногренландско лятно часово време"),
        ("HEPM", "Сен Пиер и Микелон – лятно часово време"),
        ("HEPMX", "Мексиканско тихоокеанско лятно часово време"),
        ("HKST", "Хонконгско лятно часово време"),
        ("HKT", "Хонконгско стандартно време"),
        ("HNCU", "Кубинско стандартно време"),
        ("HNEG", "Източногренландско стандартно време"),
        ("HNNOMX", "Мексико – северозападно стандартно време"),
        ("HNOG", "Западногренландско стандартно време"),
        ("HNPM", "Сен Пиер и Микелон – стандартно време"),
        ("HNPMX", "Мексиканско тихоокеанско стандартно време"),
        ("HNT", "Нюфаундлендско стандартно време"),
        ("IST", "Индийско стандартно време"),
        ("JDT", "Японско лятно часово време"),
        ("JST", "Японско стандартно време"),
        ("LHDT", "Лорд Хау – лятно часово време"),
        ("LHST", "Лорд Хау – стандартно време"),
        ("MDT", "MDT"),
        ("MESZ", "Централноевропейско лятно часово време"),
        ("MEZ", "Централноевропейско стандартно време"),
        ("MST", "MST"),
        ("MYT", "Малайзийско време"),
        ("NZDT", "Новозеландско лятно часово време"),
        ("NZST", "Новозеландско стандартно време"),
        ("OESZ", "Източноевропейско лятно часово време"),
        ("OEZ", "Източноевропейско стандартно време"),
        ("PDT", "Северноамериканско тихоокеанско лятно часово време"),
        ("PST", "Северноамериканско тихоокеанско стандартно време"),
        ("SAST", "Южноафриканско време"),
        ("SGT", "Сингапурско време"),
        ("SRT", "Суринамско време"),
        ("TMST", "Туркменистанско лятно часово време"),
        ("TMT", "Туркменистанско стандартно време"),
        ("UYST", "Уругвайско лятно часово време"),
        ("UYT", "Уругвайско стандартно време"),
        ("VET", "Венецуелско време"),
        ("WARST", "Западноаржентинско лятно часово време"),
        ("WART", "Западноаржентинско стандартно време"),
        ("WAST", "Западноафриканско лятно часово време"),
        ("WAT", "Западноафриканско стандартно време"),
        ("WESZ", "Западноевропейско лятно време"),
        ("WEZ", "Западноевропейско стандартно време"),
        ("WIB", "Западноиндонезийско време"),
        ("WIT", "Източноиндонезийско време"),
        ("WITA", "Централноиндонезийско време"),
        ("∅∅∅", "Бразилско лятно часово време"),
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
