//! Bundled ISO 3166-1 table: officially assigned codes with ISO 4217 currency.

use super::CountryRecord;

const fn country(
    name: &'static str,
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: u16,
    currency: Option<&'static str>,
) -> CountryRecord {
    CountryRecord {
        name,
        alpha2,
        alpha3,
        numeric,
        currency,
    }
}

pub(super) static COUNTRIES: &[CountryRecord] = &[
    country("Andorra", "AD", "AND", 20, Some("EUR")),
    country("United Arab Emirates", "AE", "ARE", 784, Some("AED")),
    country("Afghanistan", "AF", "AFG", 4, Some("AFN")),
    country("Antigua and Barbuda", "AG", "ATG", 28, Some("XCD")),
    country("Anguilla", "AI", "AIA", 660, Some("XCD")),
    country("Albania", "AL", "ALB", 8, Some("ALL")),
    country("Armenia", "AM", "ARM", 51, Some("AMD")),
    country("Angola", "AO", "AGO", 24, Some("AOA")),
    country("Antarctica", "AQ", "ATA", 10, None),
    country("Argentina", "AR", "ARG", 32, Some("ARS")),
    country("American Samoa", "AS", "ASM", 16, Some("USD")),
    country("Austria", "AT", "AUT", 40, Some("EUR")),
    country("Australia", "AU", "AUS", 36, Some("AUD")),
    country("Aruba", "AW", "ABW", 533, Some("AWG")),
    country("Åland Islands", "AX", "ALA", 248, Some("EUR")),
    country("Azerbaijan", "AZ", "AZE", 31, Some("AZN")),
    country("Bosnia and Herzegovina", "BA", "BIH", 70, Some("BAM")),
    country("Barbados", "BB", "BRB", 52, Some("BBD")),
    country("Bangladesh", "BD", "BGD", 50, Some("BDT")),
    country("Belgium", "BE", "BEL", 56, Some("EUR")),
    country("Burkina Faso", "BF", "BFA", 854, Some("XOF")),
    country("Bulgaria", "BG", "BGR", 100, Some("EUR")),
    country("Bahrain", "BH", "BHR", 48, Some("BHD")),
    country("Burundi", "BI", "BDI", 108, Some("BIF")),
    country("Benin", "BJ", "BEN", 204, Some("XOF")),
    country("Saint Barthélemy", "BL", "BLM", 652, Some("EUR")),
    country("Bermuda", "BM", "BMU", 60, Some("BMD")),
    country("Brunei Darussalam", "BN", "BRN", 96, Some("BND")),
    country("Bolivia, Plurinational State of", "BO", "BOL", 68, Some("BOB")),
    country("Bonaire, Sint Eustatius and Saba", "BQ", "BES", 535, Some("USD")),
    country("Brazil", "BR", "BRA", 76, Some("BRL")),
    country("Bahamas", "BS", "BHS", 44, Some("BSD")),
    country("Bhutan", "BT", "BTN", 64, Some("BTN")),
    country("Bouvet Island", "BV", "BVT", 74, Some("NOK")),
    country("Botswana", "BW", "BWA", 72, Some("BWP")),
    country("Belarus", "BY", "BLR", 112, Some("BYN")),
    country("Belize", "BZ", "BLZ", 84, Some("BZD")),
    country("Canada", "CA", "CAN", 124, Some("CAD")),
    country("Cocos (Keeling) Islands", "CC", "CCK", 166, Some("AUD")),
    country("Congo, the Democratic Republic of the", "CD", "COD", 180, Some("CDF")),
    country("Central African Republic", "CF", "CAF", 140, Some("XAF")),
    country("Congo", "CG", "COG", 178, Some("XAF")),
    country("Switzerland", "CH", "CHE", 756, Some("CHF")),
    country("Côte d'Ivoire", "CI", "CIV", 384, Some("XOF")),
    country("Cook Islands", "CK", "COK", 184, Some("NZD")),
    country("Chile", "CL", "CHL", 152, Some("CLP")),
    country("Cameroon", "CM", "CMR", 120, Some("XAF")),
    country("China", "CN", "CHN", 156, Some("CNY")),
    country("Colombia", "CO", "COL", 170, Some("COP")),
    country("Costa Rica", "CR", "CRI", 188, Some("CRC")),
    country("Cuba", "CU", "CUB", 192, Some("CUP")),
    country("Cabo Verde", "CV", "CPV", 132, Some("CVE")),
    country("Curaçao", "CW", "CUW", 531, Some("XCG")),
    country("Christmas Island", "CX", "CXR", 162, Some("AUD")),
    country("Cyprus", "CY", "CYP", 196, Some("EUR")),
    country("Czechia", "CZ", "CZE", 203, Some("CZK")),
    country("Germany", "DE", "DEU", 276, Some("EUR")),
    country("Djibouti", "DJ", "DJI", 262, Some("DJF")),
    country("Denmark", "DK", "DNK", 208, Some("DKK")),
    country("Dominica", "DM", "DMA", 212, Some("XCD")),
    country("Dominican Republic", "DO", "DOM", 214, Some("DOP")),
    country("Algeria", "DZ", "DZA", 12, Some("DZD")),
    country("Ecuador", "EC", "ECU", 218, Some("USD")),
    country("Estonia", "EE", "EST", 233, Some("EUR")),
    country("Egypt", "EG", "EGY", 818, Some("EGP")),
    country("Western Sahara", "EH", "ESH", 732, Some("MAD")),
    country("Eritrea", "ER", "ERI", 232, Some("ERN")),
    country("Spain", "ES", "ESP", 724, Some("EUR")),
    country("Ethiopia", "ET", "ETH", 231, Some("ETB")),
    country("Finland", "FI", "FIN", 246, Some("EUR")),
    country("Fiji", "FJ", "FJI", 242, Some("FJD")),
    country("Falkland Islands (Malvinas)", "FK", "FLK", 238, Some("FKP")),
    country("Micronesia, Federated States of", "FM", "FSM", 583, Some("USD")),
    country("Faroe Islands", "FO", "FRO", 234, Some("DKK")),
    country("France", "FR", "FRA", 250, Some("EUR")),
    country("Gabon", "GA", "GAB", 266, Some("XAF")),
    country("United Kingdom", "GB", "GBR", 826, Some("GBP")),
    country("Grenada", "GD", "GRD", 308, Some("XCD")),
    country("Georgia", "GE", "GEO", 268, Some("GEL")),
    country("French Guiana", "GF", "GUF", 254, Some("EUR")),
    country("Guernsey", "GG", "GGY", 831, Some("GBP")),
    country("Ghana", "GH", "GHA", 288, Some("GHS")),
    country("Gibraltar", "GI", "GIB", 292, Some("GIP")),
    country("Greenland", "GL", "GRL", 304, Some("DKK")),
    country("Gambia", "GM", "GMB", 270, Some("GMD")),
    country("Guinea", "GN", "GIN", 324, Some("GNF")),
    country("Guadeloupe", "GP", "GLP", 312, Some("EUR")),
    country("Equatorial Guinea", "GQ", "GNQ", 226, Some("XAF")),
    country("Greece", "GR", "GRC", 300, Some("EUR")),
    country("South Georgia and the South Sandwich Islands", "GS", "SGS", 239, Some("GBP")),
    country("Guatemala", "GT", "GTM", 320, Some("GTQ")),
    country("Guam", "GU", "GUM", 316, Some("USD")),
    country("Guinea-Bissau", "GW", "GNB", 624, Some("XOF")),
    country("Guyana", "GY", "GUY", 328, Some("GYD")),
    country("Hong Kong", "HK", "HKG", 344, Some("HKD")),
    country("Heard Island and McDonald Islands", "HM", "HMD", 334, Some("AUD")),
    country("Honduras", "HN", "HND", 340, Some("HNL")),
    country("Croatia", "HR", "HRV", 191, Some("EUR")),
    country("Haiti", "HT", "HTI", 332, Some("HTG")),
    country("Hungary", "HU", "HUN", 348, Some("HUF")),
    country("Indonesia", "ID", "IDN", 360, Some("IDR")),
    country("Ireland", "IE", "IRL", 372, Some("EUR")),
    country("Israel", "IL", "ISR", 376, Some("ILS")),
    country("Isle of Man", "IM", "IMN", 833, Some("GBP")),
    country("India", "IN", "IND", 356, Some("INR")),
    country("British Indian Ocean Territory", "IO", "IOT", 86, Some("USD")),
    country("Iraq", "IQ", "IRQ", 368, Some("IQD")),
    country("Iran, Islamic Republic of", "IR", "IRN", 364, Some("IRR")),
    country("Iceland", "IS", "ISL", 352, Some("ISK")),
    country("Italy", "IT", "ITA", 380, Some("EUR")),
    country("Jersey", "JE", "JEY", 832, Some("GBP")),
    country("Jamaica", "JM", "JAM", 388, Some("JMD")),
    country("Jordan", "JO", "JOR", 400, Some("JOD")),
    country("Japan", "JP", "JPN", 392, Some("JPY")),
    country("Kenya", "KE", "KEN", 404, Some("KES")),
    country("Kyrgyzstan", "KG", "KGZ", 417, Some("KGS")),
    country("Cambodia", "KH", "KHM", 116, Some("KHR")),
    country("Kiribati", "KI", "KIR", 296, Some("AUD")),
    country("Comoros", "KM", "COM", 174, Some("KMF")),
    country("Saint Kitts and Nevis", "KN", "KNA", 659, Some("XCD")),
    country("Korea, Democratic People's Republic of", "KP", "PRK", 408, Some("KPW")),
    country("Korea, Republic of", "KR", "KOR", 410, Some("KRW")),
    country("Kuwait", "KW", "KWT", 414, Some("KWD")),
    country("Cayman Islands", "KY", "CYM", 136, Some("KYD")),
    country("Kazakhstan", "KZ", "KAZ", 398, Some("KZT")),
    country("Lao People's Democratic Republic", "LA", "LAO", 418, Some("LAK")),
    country("Lebanon", "LB", "LBN", 422, Some("LBP")),
    country("Saint Lucia", "LC", "LCA", 662, Some("XCD")),
    country("Liechtenstein", "LI", "LIE", 438, Some("CHF")),
    country("Sri Lanka", "LK", "LKA", 144, Some("LKR")),
    country("Liberia", "LR", "LBR", 430, Some("LRD")),
    country("Lesotho", "LS", "LSO", 426, Some("LSL")),
    country("Lithuania", "LT", "LTU", 440, Some("EUR")),
    country("Luxembourg", "LU", "LUX", 442, Some("EUR")),
    country("Latvia", "LV", "LVA", 428, Some("EUR")),
    country("Libya", "LY", "LBY", 434, Some("LYD")),
    country("Morocco", "MA", "MAR", 504, Some("MAD")),
    country("Monaco", "MC", "MCO", 492, Some("EUR")),
    country("Moldova, Republic of", "MD", "MDA", 498, Some("MDL")),
    country("Montenegro", "ME", "MNE", 499, Some("EUR")),
    country("Saint Martin (French part)", "MF", "MAF", 663, Some("EUR")),
    country("Madagascar", "MG", "MDG", 450, Some("MGA")),
    country("Marshall Islands", "MH", "MHL", 584, Some("USD")),
    country("North Macedonia", "MK", "MKD", 807, Some("MKD")),
    country("Mali", "ML", "MLI", 466, Some("XOF")),
    country("Myanmar", "MM", "MMR", 104, Some("MMK")),
    country("Mongolia", "MN", "MNG", 496, Some("MNT")),
    country("Macao", "MO", "MAC", 446, Some("MOP")),
    country("Northern Mariana Islands", "MP", "MNP", 580, Some("USD")),
    country("Martinique", "MQ", "MTQ", 474, Some("EUR")),
    country("Mauritania", "MR", "MRT", 478, Some("MRU")),
    country("Montserrat", "MS", "MSR", 500, Some("XCD")),
    country("Malta", "MT", "MLT", 470, Some("EUR")),
    country("Mauritius", "MU", "MUS", 480, Some("MUR")),
    country("Maldives", "MV", "MDV", 462, Some("MVR")),
    country("Malawi", "MW", "MWI", 454, Some("MWK")),
    country("Mexico", "MX", "MEX", 484, Some("MXN")),
    country("Malaysia", "MY", "MYS", 458, Some("MYR")),
    country("Mozambique", "MZ", "MOZ", 508, Some("MZN")),
    country("Namibia", "NA", "NAM", 516, Some("NAD")),
    country("New Caledonia", "NC", "NCL", 540, Some("XPF")),
    country("Niger", "NE", "NER", 562, Some("XOF")),
    country("Norfolk Island", "NF", "NFK", 574, Some("AUD")),
    country("Nigeria", "NG", "NGA", 566, Some("NGN")),
    country("Nicaragua", "NI", "NIC", 558, Some("NIO")),
    country("Netherlands", "NL", "NLD", 528, Some("EUR")),
    country("Norway", "NO", "NOR", 578, Some("NOK")),
    country("Nepal", "NP", "NPL", 524, Some("NPR")),
    country("Nauru", "NR", "NRU", 520, Some("AUD")),
    country("Niue", "NU", "NIU", 570, Some("NZD")),
    country("New Zealand", "NZ", "NZL", 554, Some("NZD")),
    country("Oman", "OM", "OMN", 512, Some("OMR")),
    country("Panama", "PA", "PAN", 591, Some("PAB")),
    country("Peru", "PE", "PER", 604, Some("PEN")),
    country("French Polynesia", "PF", "PYF", 258, Some("XPF")),
    country("Papua New Guinea", "PG", "PNG", 598, Some("PGK")),
    country("Philippines", "PH", "PHL", 608, Some("PHP")),
    country("Pakistan", "PK", "PAK", 586, Some("PKR")),
    country("Poland", "PL", "POL", 616, Some("PLN")),
    country("Saint Pierre and Miquelon", "PM", "SPM", 666, Some("EUR")),
    country("Pitcairn", "PN", "PCN", 612, Some("NZD")),
    country("Puerto Rico", "PR", "PRI", 630, Some("USD")),
    country("Palestine, State of", "PS", "PSE", 275, Some("ILS")),
    country("Portugal", "PT", "PRT", 620, Some("EUR")),
    country("Palau", "PW", "PLW", 585, Some("USD")),
    country("Paraguay", "PY", "PRY", 600, Some("PYG")),
    country("Qatar", "QA", "QAT", 634, Some("QAR")),
    country("Réunion", "RE", "REU", 638, Some("EUR")),
    country("Romania", "RO", "ROU", 642, Some("RON")),
    country("Serbia", "RS", "SRB", 688, Some("RSD")),
    country("Russian Federation", "RU", "RUS", 643, Some("RUB")),
    country("Rwanda", "RW", "RWA", 646, Some("RWF")),
    country("Saudi Arabia", "SA", "SAU", 682, Some("SAR")),
    country("Solomon Islands", "SB", "SLB", 90, Some("SBD")),
    country("Seychelles", "SC", "SYC", 690, Some("SCR")),
    country("Sudan", "SD", "SDN", 729, Some("SDG")),
    country("Sweden", "SE", "SWE", 752, Some("SEK")),
    country("Singapore", "SG", "SGP", 702, Some("SGD")),
    country("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN", 654, Some("SHP")),
    country("Slovenia", "SI", "SVN", 705, Some("EUR")),
    country("Svalbard and Jan Mayen", "SJ", "SJM", 744, Some("NOK")),
    country("Slovakia", "SK", "SVK", 703, Some("EUR")),
    country("Sierra Leone", "SL", "SLE", 694, Some("SLE")),
    country("San Marino", "SM", "SMR", 674, Some("EUR")),
    country("Senegal", "SN", "SEN", 686, Some("XOF")),
    country("Somalia", "SO", "SOM", 706, Some("SOS")),
    country("Suriname", "SR", "SUR", 740, Some("SRD")),
    country("South Sudan", "SS", "SSD", 728, Some("SSP")),
    country("Sao Tome and Principe", "ST", "STP", 678, Some("STN")),
    country("El Salvador", "SV", "SLV", 222, Some("USD")),
    country("Sint Maarten (Dutch part)", "SX", "SXM", 534, Some("XCG")),
    country("Syrian Arab Republic", "SY", "SYR", 760, Some("SYP")),
    country("Eswatini", "SZ", "SWZ", 748, Some("SZL")),
    country("Turks and Caicos Islands", "TC", "TCA", 796, Some("USD")),
    country("Chad", "TD", "TCD", 148, Some("XAF")),
    country("French Southern Territories", "TF", "ATF", 260, Some("EUR")),
    country("Togo", "TG", "TGO", 768, Some("XOF")),
    country("Thailand", "TH", "THA", 764, Some("THB")),
    country("Tajikistan", "TJ", "TJK", 762, Some("TJS")),
    country("Tokelau", "TK", "TKL", 772, Some("NZD")),
    country("Timor-Leste", "TL", "TLS", 626, Some("USD")),
    country("Turkmenistan", "TM", "TKM", 795, Some("TMT")),
    country("Tunisia", "TN", "TUN", 788, Some("TND")),
    country("Tonga", "TO", "TON", 776, Some("TOP")),
    country("Türkiye", "TR", "TUR", 792, Some("TRY")),
    country("Trinidad and Tobago", "TT", "TTO", 780, Some("TTD")),
    country("Tuvalu", "TV", "TUV", 798, Some("AUD")),
    country("Taiwan, Province of China", "TW", "TWN", 158, Some("TWD")),
    country("Tanzania, United Republic of", "TZ", "TZA", 834, Some("TZS")),
    country("Ukraine", "UA", "UKR", 804, Some("UAH")),
    country("Uganda", "UG", "UGA", 800, Some("UGX")),
    country("United States Minor Outlying Islands", "UM", "UMI", 581, Some("USD")),
    country("United States", "US", "USA", 840, Some("USD")),
    country("Uruguay", "UY", "URY", 858, Some("UYU")),
    country("Uzbekistan", "UZ", "UZB", 860, Some("UZS")),
    country("Holy See (Vatican City State)", "VA", "VAT", 336, Some("EUR")),
    country("Saint Vincent and the Grenadines", "VC", "VCT", 670, Some("XCD")),
    country("Venezuela, Bolivarian Republic of", "VE", "VEN", 862, Some("VES")),
    country("Virgin Islands, British", "VG", "VGB", 92, Some("USD")),
    country("Virgin Islands, U.S.", "VI", "VIR", 850, Some("USD")),
    country("Viet Nam", "VN", "VNM", 704, Some("VND")),
    country("Vanuatu", "VU", "VUT", 548, Some("VUV")),
    country("Wallis and Futuna", "WF", "WLF", 876, Some("XPF")),
    country("Samoa", "WS", "WSM", 882, Some("WST")),
    country("Yemen", "YE", "YEM", 887, Some("YER")),
    country("Mayotte", "YT", "MYT", 175, Some("EUR")),
    country("South Africa", "ZA", "ZAF", 710, Some("ZAR")),
    country("Zambia", "ZM", "ZMB", 894, Some("ZMW")),
    country("Zimbabwe", "ZW", "ZWE", 716, Some("ZWG")),
];
