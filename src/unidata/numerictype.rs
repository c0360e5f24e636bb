// DO NOT EDIT THIS FILE. IT WAS AUTOMATICALLY GENERATED FROM THE UNICODE CHARACTER DATABASE.
//
// Unicode version: 17.0.0.
//
// Source: extracted/DerivedNumericType.txt

use crate::{
    entry::{CharClass, DatasetEntry},
    store::ValueTable,
};

pub(crate) static UNICODE: ValueTable = ValueTable::new(&[
    (
        "^decimal",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002F), (0x003A, 0x065F), (0x066A, 0x06EF), (0x06FA, 0x07BF),
            (0x07CA, 0x0965), (0x0970, 0x09E5), (0x09F0, 0x0A65), (0x0A70, 0x0AE5),
            (0x0AF0, 0x0B65), (0x0B70, 0x0BE5), (0x0BF0, 0x0C65), (0x0C70, 0x0CE5),
            (0x0CF0, 0x0D65), (0x0D70, 0x0DE5), (0x0DF0, 0x0E4F), (0x0E5A, 0x0ECF),
            (0x0EDA, 0x0F1F), (0x0F2A, 0x103F), (0x104A, 0x108F), (0x109A, 0x17DF),
            (0x17EA, 0x180F), (0x181A, 0x1945), (0x1950, 0x19CF), (0x19DA, 0x1A7F),
            (0x1A8A, 0x1A8F), (0x1A9A, 0x1B4F), (0x1B5A, 0x1BAF), (0x1BBA, 0x1C3F),
            (0x1C4A, 0x1C4F), (0x1C5A, 0xA61F), (0xA62A, 0xA8CF), (0xA8DA, 0xA8FF),
            (0xA90A, 0xA9CF), (0xA9DA, 0xA9EF), (0xA9FA, 0xAA4F), (0xAA5A, 0xABEF),
            (0xABFA, 0xFF0F), (0xFF1A, 0x1049F), (0x104AA, 0x10D2F), (0x10D3A, 0x10D3F),
            (0x10D4A, 0x11065), (0x11070, 0x110EF), (0x110FA, 0x11135), (0x11140, 0x111CF),
            (0x111DA, 0x112EF), (0x112FA, 0x1144F), (0x1145A, 0x114CF), (0x114DA, 0x1164F),
            (0x1165A, 0x116BF), (0x116CA, 0x116CF), (0x116E4, 0x1172F), (0x1173A, 0x118DF),
            (0x118EA, 0x1194F), (0x1195A, 0x11BEF), (0x11BFA, 0x11C4F), (0x11C5A, 0x11D4F),
            (0x11D5A, 0x11D9F), (0x11DAA, 0x11DDF), (0x11DEA, 0x11F4F), (0x11F5A, 0x1612F),
            (0x1613A, 0x16A5F), (0x16A6A, 0x16ABF), (0x16ACA, 0x16B4F), (0x16B5A, 0x16D6F),
            (0x16D7A, 0x1CCEF), (0x1CCFA, 0x1D7CD), (0x1D800, 0x1E13F), (0x1E14A, 0x1E2EF),
            (0x1E2FA, 0x1E4EF), (0x1E4FA, 0x1E5F0), (0x1E5FB, 0x1E94F), (0x1E95A, 0x1FBEF),
            (0x1FBFA, 0x10FFFF),
        ])),
    ),
    (
        "^digit",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x00B1), (0x00B4, 0x00B8), (0x00BA, 0x1368), (0x1372, 0x19D9),
            (0x19DB, 0x206F), (0x2071, 0x2073), (0x207A, 0x207F), (0x208A, 0x245F),
            (0x2469, 0x2473), (0x247D, 0x2487), (0x2491, 0x24E9), (0x24EB, 0x24F4),
            (0x24FE, 0x24FE), (0x2500, 0x2775), (0x277F, 0x277F), (0x2789, 0x2789),
            (0x2793, 0x10A3F), (0x10A44, 0x10E5F), (0x10E69, 0x11051), (0x1105B, 0x1F0FF),
            (0x1F10B, 0x10FFFF),
        ])),
    ),
    (
        "^none",
        DatasetEntry::Class(CharClass::new(&[
            (0x0030, 0x0039), (0x00B2, 0x00B3), (0x00B9, 0x00B9), (0x00BC, 0x00BE),
            (0x0660, 0x0669), (0x06F0, 0x06F9), (0x07C0, 0x07C9), (0x0966, 0x096F),
            (0x09E6, 0x09EF), (0x09F4, 0x09F9), (0x0A66, 0x0A6F), (0x0AE6, 0x0AEF),
            (0x0B66, 0x0B6F), (0x0B72, 0x0B77), (0x0BE6, 0x0BF2), (0x0C66, 0x0C6F),
            (0x0C78, 0x0C7E), (0x0CE6, 0x0CEF), (0x0D58, 0x0D5E), (0x0D66, 0x0D78),
            (0x0DE6, 0x0DEF), (0x0E50, 0x0E59), (0x0ED0, 0x0ED9), (0x0F20, 0x0F33),
            (0x1040, 0x1049), (0x1090, 0x1099), (0x1369, 0x137C), (0x16EE, 0x16F0),
            (0x17E0, 0x17E9), (0x17F0, 0x17F9), (0x1810, 0x1819), (0x1946, 0x194F),
            (0x19D0, 0x19DA), (0x1A80, 0x1A89), (0x1A90, 0x1A99), (0x1B50, 0x1B59),
            (0x1BB0, 0x1BB9), (0x1C40, 0x1C49), (0x1C50, 0x1C59), (0x2070, 0x2070),
            (0x2074, 0x2079), (0x2080, 0x2089), (0x2150, 0x2182), (0x2185, 0x2189),
            (0x2460, 0x249B), (0x24EA, 0x24FF), (0x2776, 0x2793), (0x2CFD, 0x2CFD),
            (0x3007, 0x3007), (0x3021, 0x3029), (0x3038, 0x303A), (0x3192, 0x3195),
            (0x3220, 0x3229), (0x3248, 0x324F), (0x3251, 0x325F), (0x3280, 0x3289),
            (0x32B1, 0x32BF), (0x3405, 0x3405), (0x3483, 0x3483), (0x382A, 0x382A),
            (0x3B4D, 0x3B4D), (0x4E00, 0x4E00), (0x4E03, 0x4E03), (0x4E07, 0x4E07),
            (0x4E09, 0x4E09), (0x4E24, 0x4E24), (0x4E5D, 0x4E5D), (0x4E8C, 0x4E8C),
            (0x4E94, 0x4E94), (0x4E96, 0x4E96), (0x4EAC, 0x4EAC), (0x4EBF, 0x4EC0),
            (0x4EDF, 0x4EDF), (0x4EE8, 0x4EE8), (0x4F0D, 0x4F0D), (0x4F70, 0x4F70),
            (0x4FE9, 0x4FE9), (0x5006, 0x5006), (0x5104, 0x5104), (0x5146, 0x5146),
            (0x5169, 0x5169), (0x516B, 0x516B), (0x516D, 0x516D), (0x5341, 0x5341),
            (0x5343, 0x5345), (0x534C, 0x534C), (0x53C1, 0x53C4), (0x56DB, 0x56DB),
            (0x58F1, 0x58F1), (0x58F9, 0x58F9), (0x5E7A, 0x5E7A), (0x5EFE, 0x5EFF),
            (0x5F0C, 0x5F0E), (0x5F10, 0x5F10), (0x62D0, 0x62D0), (0x62FE, 0x62FE),
            (0x634C, 0x634C), (0x67D2, 0x67D2), (0x6D1E, 0x6D1E), (0x6F06, 0x6F06),
            (0x7396, 0x7396), (0x767E, 0x767E), (0x7695, 0x7695), (0x79ED, 0x79ED),
            (0x8086, 0x8086), (0x842C, 0x842C), (0x8CAE, 0x8CAE), (0x8CB3, 0x8CB3),
            (0x8D30, 0x8D30), (0x920E, 0x920E), (0x94A9, 0x94A9), (0x9621, 0x9621),
            (0x9646, 0x9646), (0x964C, 0x964C), (0x9678, 0x9678), (0x96F6, 0x96F6),
            (0xA620, 0xA629), (0xA6E6, 0xA6EF), (0xA830, 0xA835), (0xA8D0, 0xA8D9),
            (0xA900, 0xA909), (0xA9D0, 0xA9D9), (0xA9F0, 0xA9F9), (0xAA50, 0xAA59),
            (0xABF0, 0xABF9), (0xF96B, 0xF96B), (0xF973, 0xF973), (0xF978, 0xF978),
            (0xF9B2, 0xF9B2), (0xF9D1, 0xF9D1), (0xF9D3, 0xF9D3), (0xF9FD, 0xF9FD),
            (0xFF10, 0xFF19), (0x10107, 0x10133), (0x10140, 0x10178), (0x1018A, 0x1018B),
            (0x102E1, 0x102FB), (0x10320, 0x10323), (0x10341, 0x10341), (0x1034A, 0x1034A),
            (0x103D1, 0x103D5), (0x104A0, 0x104A9), (0x10858, 0x1085F), (0x10879, 0x1087F),
            (0x108A7, 0x108AF), (0x108FB, 0x108FF), (0x10916, 0x1091B), (0x109BC, 0x109BD),
            (0x109C0, 0x109CF), (0x109D2, 0x109FF), (0x10A40, 0x10A48), (0x10A7D, 0x10A7E),
            (0x10A9D, 0x10A9F), (0x10AEB, 0x10AEF), (0x10B58, 0x10B5F), (0x10B78, 0x10B7F),
            (0x10BA9, 0x10BAF), (0x10CFA, 0x10CFF), (0x10D30, 0x10D39), (0x10D40, 0x10D49),
            (0x10E60, 0x10E7E), (0x10F1D, 0x10F26), (0x10F51, 0x10F54), (0x10FC5, 0x10FCB),
            (0x11052, 0x1106F), (0x110F0, 0x110F9), (0x11136, 0x1113F), (0x111D0, 0x111D9),
            (0x111E1, 0x111F4), (0x112F0, 0x112F9), (0x11450, 0x11459), (0x114D0, 0x114D9),
            (0x11650, 0x11659), (0x116C0, 0x116C9), (0x116D0, 0x116E3), (0x11730, 0x1173B),
            (0x118E0, 0x118F2), (0x11950, 0x11959), (0x11BF0, 0x11BF9), (0x11C50, 0x11C6C),
            (0x11D50, 0x11D59), (0x11DA0, 0x11DA9), (0x11DE0, 0x11DE9), (0x11F50, 0x11F59),
            (0x11FC0, 0x11FD4), (0x12038, 0x12039), (0x12079, 0x12079), (0x12226, 0x12226),
            (0x1222B, 0x1222B), (0x1230B, 0x1230B), (0x1230D, 0x1230D), (0x12399, 0x12399),
            (0x12400, 0x1246E), (0x16130, 0x16139), (0x16A60, 0x16A69), (0x16AC0, 0x16AC9),
            (0x16B50, 0x16B59), (0x16B5B, 0x16B61), (0x16D70, 0x16D79), (0x16E80, 0x16E96),
            (0x16FF4, 0x16FF6), (0x1CCF0, 0x1CCF9), (0x1D2C0, 0x1D2D3), (0x1D2E0, 0x1D2F3),
            (0x1D360, 0x1D378), (0x1D7CE, 0x1D7FF), (0x1E140, 0x1E149), (0x1E2F0, 0x1E2F9),
            (0x1E4F0, 0x1E4F9), (0x1E5F1, 0x1E5FA), (0x1E8C7, 0x1E8CF), (0x1E950, 0x1E959),
            (0x1EC71, 0x1ECAB), (0x1ECAD, 0x1ECAF), (0x1ECB1, 0x1ECB4), (0x1ED01, 0x1ED2D),
            (0x1ED2F, 0x1ED3D), (0x1F100, 0x1F10C), (0x1FBF0, 0x1FBF9), (0x20001, 0x20001),
            (0x20064, 0x20064), (0x200E2, 0x200E2), (0x20121, 0x20121), (0x2092A, 0x2092A),
            (0x20983, 0x20983), (0x2098C, 0x2098C), (0x2099C, 0x2099C), (0x20AEA, 0x20AEA),
            (0x20AFD, 0x20AFD), (0x20B19, 0x20B19), (0x22390, 0x22390), (0x22998, 0x22998),
            (0x23B1B, 0x23B1B), (0x2626D, 0x2626D), (0x2F890, 0x2F890),
        ])),
    ),
    (
        "^numeric",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x00BB), (0x00BF, 0x09F3), (0x09FA, 0x0B71), (0x0B78, 0x0BEF),
            (0x0BF3, 0x0C77), (0x0C7F, 0x0D57), (0x0D5F, 0x0D6F), (0x0D79, 0x0F29),
            (0x0F34, 0x1371), (0x137D, 0x16ED), (0x16F1, 0x17EF), (0x17FA, 0x214F),
            (0x2183, 0x2184), (0x218A, 0x2468), (0x2474, 0x247C), (0x2488, 0x2490),
            (0x249C, 0x24EA), (0x24F5, 0x24FD), (0x24FF, 0x277E), (0x2780, 0x2788),
            (0x278A, 0x2792), (0x2794, 0x2CFC), (0x2CFE, 0x3006), (0x3008, 0x3020),
            (0x302A, 0x3037), (0x303B, 0x3191), (0x3196, 0x321F), (0x322A, 0x3247),
            (0x3250, 0x3250), (0x3260, 0x327F), (0x328A, 0x32B0), (0x32C0, 0x3404),
            (0x3406, 0x3482), (0x3484, 0x3829), (0x382B, 0x3B4C), (0x3B4E, 0x4DFF),
            (0x4E01, 0x4E02), (0x4E04, 0x4E06), (0x4E08, 0x4E08), (0x4E0A, 0x4E23),
            (0x4E25, 0x4E5C), (0x4E5E, 0x4E8B), (0x4E8D, 0x4E93), (0x4E95, 0x4E95),
            (0x4E97, 0x4EAB), (0x4EAD, 0x4EBE), (0x4EC1, 0x4EDE), (0x4EE0, 0x4EE7),
            (0x4EE9, 0x4F0C), (0x4F0E, 0x4F6F), (0x4F71, 0x4FE8), (0x4FEA, 0x5005),
            (0x5007, 0x5103), (0x5105, 0x5145), (0x5147, 0x5168), (0x516A, 0x516A),
            (0x516C, 0x516C), (0x516E, 0x5340), (0x5342, 0x5342), (0x5346, 0x534B),
            (0x534D, 0x53C0), (0x53C5, 0x56DA), (0x56DC, 0x58F0), (0x58F2, 0x58F8),
            (0x58FA, 0x5E79), (0x5E7B, 0x5EFD), (0x5F00, 0x5F0B), (0x5F0F, 0x5F0F),
            (0x5F11, 0x62CF), (0x62D1, 0x62FD), (0x62FF, 0x634B), (0x634D, 0x67D1),
            (0x67D3, 0x6D1D), (0x6D1F, 0x6F05), (0x6F07, 0x7395), (0x7397, 0x767D),
            (0x767F, 0x7694), (0x7696, 0x79EC), (0x79EE, 0x8085), (0x8087, 0x842B),
            (0x842D, 0x8CAD), (0x8CAF, 0x8CB2), (0x8CB4, 0x8D2F), (0x8D31, 0x920D),
            (0x920F, 0x94A8), (0x94AA, 0x9620), (0x9622, 0x9645), (0x9647, 0x964B),
            (0x964D, 0x9677), (0x9679, 0x96F5), (0x96F7, 0xA6E5), (0xA6F0, 0xA82F),
            (0xA836, 0xF96A), (0xF96C, 0xF972), (0xF974, 0xF977), (0xF979, 0xF9B1),
            (0xF9B3, 0xF9D0), (0xF9D2, 0xF9D2), (0xF9D4, 0xF9FC), (0xF9FE, 0x10106),
            (0x10134, 0x1013F), (0x10179, 0x10189), (0x1018C, 0x102E0), (0x102FC, 0x1031F),
            (0x10324, 0x10340), (0x10342, 0x10349), (0x1034B, 0x103D0), (0x103D6, 0x10857),
            (0x10860, 0x10878), (0x10880, 0x108A6), (0x108B0, 0x108FA), (0x10900, 0x10915),
            (0x1091C, 0x109BB), (0x109BE, 0x109BF), (0x109D0, 0x109D1), (0x10A00, 0x10A43),
            (0x10A49, 0x10A7C), (0x10A7F, 0x10A9C), (0x10AA0, 0x10AEA), (0x10AF0, 0x10B57),
            (0x10B60, 0x10B77), (0x10B80, 0x10BA8), (0x10BB0, 0x10CF9), (0x10D00, 0x10E68),
            (0x10E7F, 0x10F1C), (0x10F27, 0x10F50), (0x10F55, 0x10FC4), (0x10FCC, 0x1105A),
            (0x11066, 0x111E0), (0x111F5, 0x11739), (0x1173C, 0x118E9), (0x118F3, 0x11C59),
            (0x11C6D, 0x11FBF), (0x11FD5, 0x12037), (0x1203A, 0x12078), (0x1207A, 0x12225),
            (0x12227, 0x1222A), (0x1222C, 0x1230A), (0x1230C, 0x1230C), (0x1230E, 0x12398),
            (0x1239A, 0x123FF), (0x1246F, 0x16B5A), (0x16B62, 0x16E7F), (0x16E97, 0x16FF3),
            (0x16FF7, 0x1D2BF), (0x1D2D4, 0x1D2DF), (0x1D2F4, 0x1D35F), (0x1D379, 0x1E8C6),
            (0x1E8D0, 0x1EC70), (0x1ECAC, 0x1ECAC), (0x1ECB0, 0x1ECB0), (0x1ECB5, 0x1ED00),
            (0x1ED2E, 0x1ED2E), (0x1ED3E, 0x1F10A), (0x1F10D, 0x20000), (0x20002, 0x20063),
            (0x20065, 0x200E1), (0x200E3, 0x20120), (0x20122, 0x20929), (0x2092B, 0x20982),
            (0x20984, 0x2098B), (0x2098D, 0x2099B), (0x2099D, 0x20AE9), (0x20AEB, 0x20AFC),
            (0x20AFE, 0x20B18), (0x20B1A, 0x2238F), (0x22391, 0x22997), (0x22999, 0x23B1A),
            (0x23B1C, 0x2626C), (0x2626E, 0x2F88F), (0x2F891, 0x10FFFF),
        ])),
    ),
    (
        "decimal",
        DatasetEntry::Class(CharClass::new(&[
            (0x0030, 0x0039), (0x0660, 0x0669), (0x06F0, 0x06F9), (0x07C0, 0x07C9),
            (0x0966, 0x096F), (0x09E6, 0x09EF), (0x0A66, 0x0A6F), (0x0AE6, 0x0AEF),
            (0x0B66, 0x0B6F), (0x0BE6, 0x0BEF), (0x0C66, 0x0C6F), (0x0CE6, 0x0CEF),
            (0x0D66, 0x0D6F), (0x0DE6, 0x0DEF), (0x0E50, 0x0E59), (0x0ED0, 0x0ED9),
            (0x0F20, 0x0F29), (0x1040, 0x1049), (0x1090, 0x1099), (0x17E0, 0x17E9),
            (0x1810, 0x1819), (0x1946, 0x194F), (0x19D0, 0x19D9), (0x1A80, 0x1A89),
            (0x1A90, 0x1A99), (0x1B50, 0x1B59), (0x1BB0, 0x1BB9), (0x1C40, 0x1C49),
            (0x1C50, 0x1C59), (0xA620, 0xA629), (0xA8D0, 0xA8D9), (0xA900, 0xA909),
            (0xA9D0, 0xA9D9), (0xA9F0, 0xA9F9), (0xAA50, 0xAA59), (0xABF0, 0xABF9),
            (0xFF10, 0xFF19), (0x104A0, 0x104A9), (0x10D30, 0x10D39), (0x10D40, 0x10D49),
            (0x11066, 0x1106F), (0x110F0, 0x110F9), (0x11136, 0x1113F), (0x111D0, 0x111D9),
            (0x112F0, 0x112F9), (0x11450, 0x11459), (0x114D0, 0x114D9), (0x11650, 0x11659),
            (0x116C0, 0x116C9), (0x116D0, 0x116E3), (0x11730, 0x11739), (0x118E0, 0x118E9),
            (0x11950, 0x11959), (0x11BF0, 0x11BF9), (0x11C50, 0x11C59), (0x11D50, 0x11D59),
            (0x11DA0, 0x11DA9), (0x11DE0, 0x11DE9), (0x11F50, 0x11F59), (0x16130, 0x16139),
            (0x16A60, 0x16A69), (0x16AC0, 0x16AC9), (0x16B50, 0x16B59), (0x16D70, 0x16D79),
            (0x1CCF0, 0x1CCF9), (0x1D7CE, 0x1D7FF), (0x1E140, 0x1E149), (0x1E2F0, 0x1E2F9),
            (0x1E4F0, 0x1E4F9), (0x1E5F1, 0x1E5FA), (0x1E950, 0x1E959), (0x1FBF0, 0x1FBF9),
        ])),
    ),
    (
        "digit",
        DatasetEntry::Class(CharClass::new(&[
            (0x00B2, 0x00B3), (0x00B9, 0x00B9), (0x1369, 0x1371), (0x19DA, 0x19DA),
            (0x2070, 0x2070), (0x2074, 0x2079), (0x2080, 0x2089), (0x2460, 0x2468),
            (0x2474, 0x247C), (0x2488, 0x2490), (0x24EA, 0x24EA), (0x24F5, 0x24FD),
            (0x24FF, 0x24FF), (0x2776, 0x277E), (0x2780, 0x2788), (0x278A, 0x2792),
            (0x10A40, 0x10A43), (0x10E60, 0x10E68), (0x11052, 0x1105A), (0x1F100, 0x1F10A),
        ])),
    ),
    (
        "none",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002F), (0x003A, 0x00B1), (0x00B4, 0x00B8), (0x00BA, 0x00BB),
            (0x00BF, 0x065F), (0x066A, 0x06EF), (0x06FA, 0x07BF), (0x07CA, 0x0965),
            (0x0970, 0x09E5), (0x09F0, 0x09F3), (0x09FA, 0x0A65), (0x0A70, 0x0AE5),
            (0x0AF0, 0x0B65), (0x0B70, 0x0B71), (0x0B78, 0x0BE5), (0x0BF3, 0x0C65),
            (0x0C70, 0x0C77), (0x0C7F, 0x0CE5), (0x0CF0, 0x0D57), (0x0D5F, 0x0D65),
            (0x0D79, 0x0DE5), (0x0DF0, 0x0E4F), (0x0E5A, 0x0ECF), (0x0EDA, 0x0F1F),
            (0x0F34, 0x103F), (0x104A, 0x108F), (0x109A, 0x1368), (0x137D, 0x16ED),
            (0x16F1, 0x17DF), (0x17EA, 0x17EF), (0x17FA, 0x180F), (0x181A, 0x1945),
            (0x1950, 0x19CF), (0x19DB, 0x1A7F), (0x1A8A, 0x1A8F), (0x1A9A, 0x1B4F),
            (0x1B5A, 0x1BAF), (0x1BBA, 0x1C3F), (0x1C4A, 0x1C4F), (0x1C5A, 0x206F),
            (0x2071, 0x2073), (0x207A, 0x207F), (0x208A, 0x214F), (0x2183, 0x2184),
            (0x218A, 0x245F), (0x249C, 0x24E9), (0x2500, 0x2775), (0x2794, 0x2CFC),
            (0x2CFE, 0x3006), (0x3008, 0x3020), (0x302A, 0x3037), (0x303B, 0x3191),
            (0x3196, 0x321F), (0x322A, 0x3247), (0x3250, 0x3250), (0x3260, 0x327F),
            (0x328A, 0x32B0), (0x32C0, 0x3404), (0x3406, 0x3482), (0x3484, 0x3829),
            (0x382B, 0x3B4C), (0x3B4E, 0x4DFF), (0x4E01, 0x4E02), (0x4E04, 0x4E06),
            (0x4E08, 0x4E08), (0x4E0A, 0x4E23), (0x4E25, 0x4E5C), (0x4E5E, 0x4E8B),
            (0x4E8D, 0x4E93), (0x4E95, 0x4E95), (0x4E97, 0x4EAB), (0x4EAD, 0x4EBE),
            (0x4EC1, 0x4EDE), (0x4EE0, 0x4EE7), (0x4EE9, 0x4F0C), (0x4F0E, 0x4F6F),
            (0x4F71, 0x4FE8), (0x4FEA, 0x5005), (0x5007, 0x5103), (0x5105, 0x5145),
            (0x5147, 0x5168), (0x516A, 0x516A), (0x516C, 0x516C), (0x516E, 0x5340),
            (0x5342, 0x5342), (0x5346, 0x534B), (0x534D, 0x53C0), (0x53C5, 0x56DA),
            (0x56DC, 0x58F0), (0x58F2, 0x58F8), (0x58FA, 0x5E79), (0x5E7B, 0x5EFD),
            (0x5F00, 0x5F0B), (0x5F0F, 0x5F0F), (0x5F11, 0x62CF), (0x62D1, 0x62FD),
            (0x62FF, 0x634B), (0x634D, 0x67D1), (0x67D3, 0x6D1D), (0x6D1F, 0x6F05),
            (0x6F07, 0x7395), (0x7397, 0x767D), (0x767F, 0x7694), (0x7696, 0x79EC),
            (0x79EE, 0x8085), (0x8087, 0x842B), (0x842D, 0x8CAD), (0x8CAF, 0x8CB2),
            (0x8CB4, 0x8D2F), (0x8D31, 0x920D), (0x920F, 0x94A8), (0x94AA, 0x9620),
            (0x9622, 0x9645), (0x9647, 0x964B), (0x964D, 0x9677), (0x9679, 0x96F5),
            (0x96F7, 0xA61F), (0xA62A, 0xA6E5), (0xA6F0, 0xA82F), (0xA836, 0xA8CF),
            (0xA8DA, 0xA8FF), (0xA90A, 0xA9CF), (0xA9DA, 0xA9EF), (0xA9FA, 0xAA4F),
            (0xAA5A, 0xABEF), (0xABFA, 0xF96A), (0xF96C, 0xF972), (0xF974, 0xF977),
            (0xF979, 0xF9B1), (0xF9B3, 0xF9D0), (0xF9D2, 0xF9D2), (0xF9D4, 0xF9FC),
            (0xF9FE, 0xFF0F), (0xFF1A, 0x10106), (0x10134, 0x1013F), (0x10179, 0x10189),
            (0x1018C, 0x102E0), (0x102FC, 0x1031F), (0x10324, 0x10340), (0x10342, 0x10349),
            (0x1034B, 0x103D0), (0x103D6, 0x1049F), (0x104AA, 0x10857), (0x10860, 0x10878),
            (0x10880, 0x108A6), (0x108B0, 0x108FA), (0x10900, 0x10915), (0x1091C, 0x109BB),
            (0x109BE, 0x109BF), (0x109D0, 0x109D1), (0x10A00, 0x10A3F), (0x10A49, 0x10A7C),
            (0x10A7F, 0x10A9C), (0x10AA0, 0x10AEA), (0x10AF0, 0x10B57), (0x10B60, 0x10B77),
            (0x10B80, 0x10BA8), (0x10BB0, 0x10CF9), (0x10D00, 0x10D2F), (0x10D3A, 0x10D3F),
            (0x10D4A, 0x10E5F), (0x10E7F, 0x10F1C), (0x10F27, 0x10F50), (0x10F55, 0x10FC4),
            (0x10FCC, 0x11051), (0x11070, 0x110EF), (0x110FA, 0x11135), (0x11140, 0x111CF),
            (0x111DA, 0x111E0), (0x111F5, 0x112EF), (0x112FA, 0x1144F), (0x1145A, 0x114CF),
            (0x114DA, 0x1164F), (0x1165A, 0x116BF), (0x116CA, 0x116CF), (0x116E4, 0x1172F),
            (0x1173C, 0x118DF), (0x118F3, 0x1194F), (0x1195A, 0x11BEF), (0x11BFA, 0x11C4F),
            (0x11C6D, 0x11D4F), (0x11D5A, 0x11D9F), (0x11DAA, 0x11DDF), (0x11DEA, 0x11F4F),
            (0x11F5A, 0x11FBF), (0x11FD5, 0x12037), (0x1203A, 0x12078), (0x1207A, 0x12225),
            (0x12227, 0x1222A), (0x1222C, 0x1230A), (0x1230C, 0x1230C), (0x1230E, 0x12398),
            (0x1239A, 0x123FF), (0x1246F, 0x1612F), (0x1613A, 0x16A5F), (0x16A6A, 0x16ABF),
            (0x16ACA, 0x16B4F), (0x16B5A, 0x16B5A), (0x16B62, 0x16D6F), (0x16D7A, 0x16E7F),
            (0x16E97, 0x16FF3), (0x16FF7, 0x1CCEF), (0x1CCFA, 0x1D2BF), (0x1D2D4, 0x1D2DF),
            (0x1D2F4, 0x1D35F), (0x1D379, 0x1D7CD), (0x1D800, 0x1E13F), (0x1E14A, 0x1E2EF),
            (0x1E2FA, 0x1E4EF), (0x1E4FA, 0x1E5F0), (0x1E5FB, 0x1E8C6), (0x1E8D0, 0x1E94F),
            (0x1E95A, 0x1EC70), (0x1ECAC, 0x1ECAC), (0x1ECB0, 0x1ECB0), (0x1ECB5, 0x1ED00),
            (0x1ED2E, 0x1ED2E), (0x1ED3E, 0x1F0FF), (0x1F10D, 0x1FBEF), (0x1FBFA, 0x20000),
            (0x20002, 0x20063), (0x20065, 0x200E1), (0x200E3, 0x20120), (0x20122, 0x20929),
            (0x2092B, 0x20982), (0x20984, 0x2098B), (0x2098D, 0x2099B), (0x2099D, 0x20AE9),
            (0x20AEB, 0x20AFC), (0x20AFE, 0x20B18), (0x20B1A, 0x2238F), (0x22391, 0x22997),
            (0x22999, 0x23B1A), (0x23B1C, 0x2626C), (0x2626E, 0x2F88F), (0x2F891, 0x10FFFF),
        ])),
    ),
    (
        "numeric",
        DatasetEntry::Class(CharClass::new(&[
            (0x00BC, 0x00BE), (0x09F4, 0x09F9), (0x0B72, 0x0B77), (0x0BF0, 0x0BF2),
            (0x0C78, 0x0C7E), (0x0D58, 0x0D5E), (0x0D70, 0x0D78), (0x0F2A, 0x0F33),
            (0x1372, 0x137C), (0x16EE, 0x16F0), (0x17F0, 0x17F9), (0x2150, 0x2182),
            (0x2185, 0x2189), (0x2469, 0x2473), (0x247D, 0x2487), (0x2491, 0x249B),
            (0x24EB, 0x24F4), (0x24FE, 0x24FE), (0x277F, 0x277F), (0x2789, 0x2789),
            (0x2793, 0x2793), (0x2CFD, 0x2CFD), (0x3007, 0x3007), (0x3021, 0x3029),
            (0x3038, 0x303A), (0x3192, 0x3195), (0x3220, 0x3229), (0x3248, 0x324F),
            (0x3251, 0x325F), (0x3280, 0x3289), (0x32B1, 0x32BF), (0x3405, 0x3405),
            (0x3483, 0x3483), (0x382A, 0x382A), (0x3B4D, 0x3B4D), (0x4E00, 0x4E00),
            (0x4E03, 0x4E03), (0x4E07, 0x4E07), (0x4E09, 0x4E09), (0x4E24, 0x4E24),
            (0x4E5D, 0x4E5D), (0x4E8C, 0x4E8C), (0x4E94, 0x4E94), (0x4E96, 0x4E96),
            (0x4EAC, 0x4EAC), (0x4EBF, 0x4EC0), (0x4EDF, 0x4EDF), (0x4EE8, 0x4EE8),
            (0x4F0D, 0x4F0D), (0x4F70, 0x4F70), (0x4FE9, 0x4FE9), (0x5006, 0x5006),
            (0x5104, 0x5104), (0x5146, 0x5146), (0x5169, 0x5169), (0x516B, 0x516B),
            (0x516D, 0x516D), (0x5341, 0x5341), (0x5343, 0x5345), (0x534C, 0x534C),
            (0x53C1, 0x53C4), (0x56DB, 0x56DB), (0x58F1, 0x58F1), (0x58F9, 0x58F9),
            (0x5E7A, 0x5E7A), (0x5EFE, 0x5EFF), (0x5F0C, 0x5F0E), (0x5F10, 0x5F10),
            (0x62D0, 0x62D0), (0x62FE, 0x62FE), (0x634C, 0x634C), (0x67D2, 0x67D2),
            (0x6D1E, 0x6D1E), (0x6F06, 0x6F06), (0x7396, 0x7396), (0x767E, 0x767E),
            (0x7695, 0x7695), (0x79ED, 0x79ED), (0x8086, 0x8086), (0x842C, 0x842C),
            (0x8CAE, 0x8CAE), (0x8CB3, 0x8CB3), (0x8D30, 0x8D30), (0x920E, 0x920E),
            (0x94A9, 0x94A9), (0x9621, 0x9621), (0x9646, 0x9646), (0x964C, 0x964C),
            (0x9678, 0x9678), (0x96F6, 0x96F6), (0xA6E6, 0xA6EF), (0xA830, 0xA835),
            (0xF96B, 0xF96B), (0xF973, 0xF973), (0xF978, 0xF978), (0xF9B2, 0xF9B2),
            (0xF9D1, 0xF9D1), (0xF9D3, 0xF9D3), (0xF9FD, 0xF9FD), (0x10107, 0x10133),
            (0x10140, 0x10178), (0x1018A, 0x1018B), (0x102E1, 0x102FB), (0x10320, 0x10323),
            (0x10341, 0x10341), (0x1034A, 0x1034A), (0x103D1, 0x103D5), (0x10858, 0x1085F),
            (0x10879, 0x1087F), (0x108A7, 0x108AF), (0x108FB, 0x108FF), (0x10916, 0x1091B),
            (0x109BC, 0x109BD), (0x109C0, 0x109CF), (0x109D2, 0x109FF), (0x10A44, 0x10A48),
            (0x10A7D, 0x10A7E), (0x10A9D, 0x10A9F), (0x10AEB, 0x10AEF), (0x10B58, 0x10B5F),
            (0x10B78, 0x10B7F), (0x10BA9, 0x10BAF), (0x10CFA, 0x10CFF), (0x10E69, 0x10E7E),
            (0x10F1D, 0x10F26), (0x10F51, 0x10F54), (0x10FC5, 0x10FCB), (0x1105B, 0x11065),
            (0x111E1, 0x111F4), (0x1173A, 0x1173B), (0x118EA, 0x118F2), (0x11C5A, 0x11C6C),
            (0x11FC0, 0x11FD4), (0x12038, 0x12039), (0x12079, 0x12079), (0x12226, 0x12226),
            (0x1222B, 0x1222B), (0x1230B, 0x1230B), (0x1230D, 0x1230D), (0x12399, 0x12399),
            (0x12400, 0x1246E), (0x16B5B, 0x16B61), (0x16E80, 0x16E96), (0x16FF4, 0x16FF6),
            (0x1D2C0, 0x1D2D3), (0x1D2E0, 0x1D2F3), (0x1D360, 0x1D378), (0x1E8C7, 0x1E8CF),
            (0x1EC71, 0x1ECAB), (0x1ECAD, 0x1ECAF), (0x1ECB1, 0x1ECB4), (0x1ED01, 0x1ED2D),
            (0x1ED2F, 0x1ED3D), (0x1F10B, 0x1F10C), (0x20001, 0x20001), (0x20064, 0x20064),
            (0x200E2, 0x200E2), (0x20121, 0x20121), (0x2092A, 0x2092A), (0x20983, 0x20983),
            (0x2098C, 0x2098C), (0x2099C, 0x2099C), (0x20AEA, 0x20AEA), (0x20AFD, 0x20AFD),
            (0x20B19, 0x20B19), (0x22390, 0x22390), (0x22998, 0x22998), (0x23B1B, 0x23B1B),
            (0x2626D, 0x2626D), (0x2F890, 0x2F890),
        ])),
    ),
]);

pub(crate) static ASCII: ValueTable = ValueTable::new(&[
    (
        "^decimal",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002F), (0x003A, 0x007F),
        ])),
    ),
    (
        "^digit",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^none",
        DatasetEntry::Class(CharClass::new(&[
            (0x0030, 0x0039),
        ])),
    ),
    (
        "^numeric",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "decimal",
        DatasetEntry::Class(CharClass::new(&[
            (0x0030, 0x0039),
        ])),
    ),
    (
        "digit",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "none",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002F), (0x003A, 0x007F),
        ])),
    ),
    (
        "numeric",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
]);
