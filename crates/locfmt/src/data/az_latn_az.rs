//! Azerbaijani, Latin script, as used in Azerbaijan (`az_Latn_AZ`).

use crate::data::LocaleData;
use crate::types::PluralCategory::{Few, Many, One, Other};

pub const AZ_LATN_AZ: LocaleData = LocaleData {
    id: "az_Latn_AZ",
    decimal: ",",
    group: ".",
    minus: "-",
    percent: "%",
    per_mille: "‰",
    infinity: "∞",
    time_separator: ":",
    plurals_cardinal: &[One, Other],
    plurals_ordinal: &[One, Few, Many, Other],
    plurals_range: &[One, Other],
    cardinal_rules: Some(&[
        (One, "n = 1"),
    ]),
    ordinal_rules: Some(&[
        (One, "i % 10 = 1,2,5,7,8 or i % 100 = 20,50,70,80"),
        (Few, "i % 10 = 3,4 or i % 1000 = 100,200,300,400,500,600,700,800,900"),
        (Many, "i = 0 or i % 10 = 6 or i % 100 = 40,60,90"),
    ]),
    range_rules: Some(&[
        (One, Other, Other),
        (Other, One, One),
    ]),
    number_pattern: "#,##0.###",
    percent_pattern: "#0%",
    currency_pattern: "\u{a0}¤#,##0.00",
    accounting_pattern: "\u{a0}¤#,##0.00",
    date_short: "dd.MM.yy",
    date_medium: "d MMM y",
    date_long: "d MMMM y",
    date_full: "d MMMM y, EEEE",
    time_short: "HH:mm",
    time_medium: "HH:mm:ss",
    time_long: "HH:mm:ss z",
    time_full: "HH:mm:ss zzzz",
    months_abbreviated: &[
        "",
        "yan",
        "fev",
        "mar",
        "apr",
        "may",
        "iyn",
        "iyl",
        "avq",
        "sen",
        "okt",
        "noy",
        "dek",
    ],
    months_narrow: &["", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"],
    months_wide: &[
        "",
        "yanvar",
        "fevral",
        "mart",
        "aprel",
        "may",
        "iyun",
        "iyul",
        "avqust",
        "sentyabr",
        "oktyabr",
        "noyabr",
        "dekabr",
    ],
    weekdays_abbreviated: &["B.", "B.E.", "Ç.A.", "Ç.", "C.A.", "C.", "Ş."],
    weekdays_narrow: &["7", "1", "2", "3", "4", "5", "6"],
    weekdays_short: &["B.", "B.E.", "Ç.A.", "Ç.", "C.A.", "C.", "Ş."],
    weekdays_wide: &[
        "bazar",
        "bazar ertəsi",
        "çərşənbə axşamı",
        "çərşənbə",
        "cümə axşamı",
        "cümə",
        "şənbə",
    ],
    periods_abbreviated: &["AM", "PM"],
    periods_narrow: &["a", "p"],
    periods_wide: &["AM", "PM"],
    eras_abbreviated: &["e.ə.", "y.e."],
    eras_narrow: &["", ""],
    eras_wide: &["eramızdan əvvəl", "yeni era"],
    timezones: &[
        ("ACDT", "Mərkəzi Avstraliya Yay Vaxtı"),
        ("ACST", "Mərkəzi Avstraliya Standart Vaxtı"),
        ("ACWDT", "Mərkəzi Qərbi Avstraliya Yay Vaxtı"),
        ("ACWST", "Mərkəzi Qərbi Avstraliya Standart Vaxtı"),
        ("ADT", "Atlantik Yay Vaxtı"),
        ("AEDT", "Şərqi Avstraliya Yay Vaxtı"),
        ("AEST", "Şərqi Avstraliya Standart Vaxtı"),
        ("AKDT", "Alyaska Yay Vaxtı"),
        ("AKST", "Alyaska Standart Vaxtı"),
        ("ARST", "Argentina Yay Vaxtı"),
        ("ART", "Argentina Standart Vaxtı"),
        ("AST", "Atlantik Standart Vaxt"),
        ("AWDT", "Qərbi Avstraliya Yay Vaxtı"),
        ("AWST", "Qərbi Avstraliya Standart Vaxtı"),
        ("BOT", "Boliviya Vaxtı"),
        ("BT", "Butan Vaxtı"),
        ("CAT", "Mərkəzi Afrika Vaxtı"),
        ("CDT", "Şimali Mərkəzi Amerika Yay Vaxtı"),
        ("CHADT", "Çatham Yay Vaxtı"),
        ("CHAST", "Çatham Standart Vaxtı"),
        ("CLST", "Çili Yay Vaxtı"),
        ("CLT", "Çili Standart Vaxtı"),
        ("COST", "Kolumbiya Yay Vaxtı"),
        ("COT", "Kolumbiya Standart Vaxtı"),
        ("CST", "Şimali Mərkəzi Amerika Standart Vaxtı"),
        ("ChST", "Çamorro Vaxtı"),
        ("EAT", "Şərqi Afrika Vaxtı"),
        ("ECT", "Ekvador Vaxtı"),
        ("EDT", "Şimali Şərqi Amerika Yay Vaxtı"),
        ("EST", "Şimali Şərqi Amerika Standart Vaxtı"),
        ("GFT", "Fransız Qvianası Vaxtı"),
        ("GMT", "Qrinviç Orta Vaxtı"),
        ("GYT", "Qayana Vaxtı"),
        ("HADT", "Havay-Aleut Yay Vaxtı"),
        ("HAST", "Havay-Aleut Standart Vaxtı"),
        ("HAT", "Nyufaundlend Yay Vaxtı"),
        ("HECU", "Kuba Yay Vaxtı"),
        ("HEEG", "Şərqi Qrenlandiya Yay Vaxtı"),
        ("HENOMX", "Şimal-Qərbi Meksika Yay Vaxtı"),
        ("HEOG", "Qərbi Qrenlandiya Yay Vaxtı"),
        ("HEPM", "San Pier və Mikelon Yay Vaxtı"),
        ("HEPMX", "Meksika Sakit Okean Yay Vaxtı"),
        ("HKST", "Honq Konq Yay Vaxtı"),
        ("HKT", "Honq Konq Standart Vaxtı"),
        ("HNCU", "Kuba Standart Vaxtı"),
        ("HNEG", "Şərqi Qrenlandiya Standart Vaxtı"),
        ("HNNOMX", "Şimal-Qərbi Meksika Standart Vaxtı"),
        ("HNOG", "Qərbi Qrenlandiya Standart Vaxtı"),
        ("HNPM", "San Pier və Mikelon Standart Vaxtı"),
        ("HNPMX", "Meksika Sakit Okean Standart Vaxtı"),
        ("HNT", "Nyufaundlend Standart Vaxtı"),
        ("IST", "Hindistan Vaxtı"),
        ("JDT", "Yaponiya Yay Vaxtı"),
        ("JST", "Yaponiya Standart Vaxtı"),
        ("LHDT", "Lord Hau Yay vaxtı"),
        ("LHST", "Lord Hau Standart Vaxtı"),
        ("MDT", "Şimali Dağlıq Amerika Yay Vaxtı"),
        ("MESZ", "Mərkəzi Avropa Yay Vaxtı"),
        ("MEZ", "Mərkəzi Avropa Standart Vaxtı"),
        ("MST", "Şimali Dağlıq Amerika Standart Vaxtı"),
        ("MYT", "Malayziya Vaxtı"),
        ("NZDT", "Yeni Zelandiya Yay Vaxtı"),
        ("NZST", "Yeni Zelandiya Standart Vaxtı"),
        ("OESZ", "Şərqi Avropa Yay Vaxtı"),
        ("OEZ", "Şərqi Avropa Standart Vaxtı"),
        ("PDT", "Şimali Amerika Sakit Okean Yay Vaxtı"),
        ("PST", "Şimali Amerika Sakit Okean Standart Vaxtı"),
        ("SAST", "Cənubi Afrika Vaxtı"),
        ("SGT", "Sinqapur Vaxtı"),
        ("SRT", "Surinam Vaxtı"),
        ("TMST", "Türkmənistan Yay Vaxtı"),
        ("TMT", "Türkmənistan Standart Vaxtı"),
        ("UYST", "Uruqvay Yay Vaxtı"),
        ("UYT", "Uruqvay Standart Vaxtı"),
        ("VET", "Venesuela Vaxtı"),
        ("WARST", "Qərbi Argentina Yay Vaxtı"),
        ("WART", "Qərbi Argentina Standart Vaxtı"),
        ("WAST", "Qərbi Afrika Yay Vaxtı"),
        ("WAT", "Qərbi Afrika Standart Vaxtı"),
        ("WESZ", "Qərbi Avropa Yay Vaxtı"),
        ("WEZ", "Qərbi Avropa Standart Vaxtı"),
        ("WIB", "Qərbi İndoneziya Vaxtı"),
        ("WIT", "Şərqi İndoneziya Vaxtı"),
        ("WITA", "Mərkəzi İndoneziya Vaxtı"),
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
