// DO NOT EDIT THIS FILE. IT WAS AUTOMATICALLY GENERATED FROM THE UNICODE CHARACTER DATABASE.
//
// Unicode version: 17.0.0.
//
// Source: auxiliary/WordBreakProperty.txt

use crate::{
    entry::{CharClass, DatasetEntry},
    store::ValueTable,
};

pub(crate) static UNICODE: ValueTable = ValueTable::new(&[
    (
        "^aletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0040), (0x005B, 0x0060), (0x007B, 0x00A9), (0x00AB, 0x00B4),
            (0x00B6, 0x00B7), (0x00B9, 0x00B9), (0x00BB, 0x00BF), (0x00D7, 0x00D7),
            (0x00F7, 0x00F7), (0x02D8, 0x02DD), (0x0300, 0x036F), (0x0375, 0x0375),
            (0x0378, 0x0379), (0x037E, 0x037E), (0x0380, 0x0385), (0x0387, 0x0387),
            (0x038B, 0x038B), (0x038D, 0x038D), (0x03A2, 0x03A2), (0x03F6, 0x03F6),
            (0x0482, 0x0489), (0x0530, 0x0530), (0x0557, 0x0558), (0x055D, 0x055D),
            (0x055F, 0x055F), (0x0589, 0x0589), (0x058B, 0x05F2), (0x05F4, 0x061F),
            (0x064B, 0x066D), (0x0670, 0x0670), (0x06D4, 0x06D4), (0x06D6, 0x06E4),
            (0x06E7, 0x06ED), (0x06F0, 0x06F9), (0x06FD, 0x06FE), (0x0700, 0x070E),
            (0x0711, 0x0711), (0x0730, 0x074C), (0x07A6, 0x07B0), (0x07B2, 0x07C9),
            (0x07EB, 0x07F3), (0x07F6, 0x07F9), (0x07FB, 0x07FF), (0x0816, 0x0819),
            (0x081B, 0x0823), (0x0825, 0x0827), (0x0829, 0x083F), (0x0859, 0x085F),
            (0x086B, 0x086F), (0x0888, 0x0888), (0x0890, 0x089F), (0x08CA, 0x0903),
            (0x093A, 0x093C), (0x093E, 0x094F), (0x0951, 0x0957), (0x0962, 0x0970),
            (0x0981, 0x0984), (0x098D, 0x098E), (0x0991, 0x0992), (0x09A9, 0x09A9),
            (0x09B1, 0x09B1), (0x09B3, 0x09B5), (0x09BA, 0x09BC), (0x09BE, 0x09CD),
            (0x09CF, 0x09DB), (0x09DE, 0x09DE), (0x09E2, 0x09EF), (0x09F2, 0x09FB),
            (0x09FD, 0x0A04), (0x0A0B, 0x0A0E), (0x0A11, 0x0A12), (0x0A29, 0x0A29),
            (0x0A31, 0x0A31), (0x0A34, 0x0A34), (0x0A37, 0x0A37), (0x0A3A, 0x0A58),
            (0x0A5D, 0x0A5D), (0x0A5F, 0x0A71), (0x0A75, 0x0A84), (0x0A8E, 0x0A8E),
            (0x0A92, 0x0A92), (0x0AA9, 0x0AA9), (0x0AB1, 0x0AB1), (0x0AB4, 0x0AB4),
            (0x0ABA, 0x0ABC), (0x0ABE, 0x0ACF), (0x0AD1, 0x0ADF), (0x0AE2, 0x0AF8),
            (0x0AFA, 0x0B04), (0x0B0D, 0x0B0E), (0x0B11, 0x0B12), (0x0B29, 0x0B29),
            (0x0B31, 0x0B31), (0x0B34, 0x0B34), (0x0B3A, 0x0B3C), (0x0B3E, 0x0B5B),
            (0x0B5E, 0x0B5E), (0x0B62, 0x0B70), (0x0B72, 0x0B82), (0x0B84, 0x0B84),
            (0x0B8B, 0x0B8D), (0x0B91, 0x0B91), (0x0B96, 0x0B98), (0x0B9B, 0x0B9B),
            (0x0B9D, 0x0B9D), (0x0BA0, 0x0BA2), (0x0BA5, 0x0BA7), (0x0BAB, 0x0BAD),
            (0x0BBA, 0x0BCF), (0x0BD1, 0x0C04), (0x0C0D, 0x0C0D), (0x0C11, 0x0C11),
            (0x0C29, 0x0C29), (0x0C3A, 0x0C3C), (0x0C3E, 0x0C57), (0x0C5B, 0x0C5B),
            (0x0C5E, 0x0C5F), (0x0C62, 0x0C7F), (0x0C81, 0x0C84), (0x0C8D, 0x0C8D),
            (0x0C91, 0x0C91), (0x0CA9, 0x0CA9), (0x0CB4, 0x0CB4), (0x0CBA, 0x0CBC),
            (0x0CBE, 0x0CDB), (0x0CDF, 0x0CDF), (0x0CE2, 0x0CF0), (0x0CF3, 0x0D03),
            (0x0D0D, 0x0D0D), (0x0D11, 0x0D11), (0x0D3B, 0x0D3C), (0x0D3E, 0x0D4D),
            (0x0D4F, 0x0D53), (0x0D57, 0x0D5E), (0x0D62, 0x0D79), (0x0D80, 0x0D84),
            (0x0D97, 0x0D99), (0x0DB2, 0x0DB2), (0x0DBC, 0x0DBC), (0x0DBE, 0x0DBF),
            (0x0DC7, 0x0EFF), (0x0F01, 0x0F3F), (0x0F48, 0x0F48), (0x0F6D, 0x0F87),
            (0x0F8D, 0x109F), (0x10C6, 0x10C6), (0x10C8, 0x10CC), (0x10CE, 0x10CF),
            (0x10FB, 0x10FB), (0x1249, 0x1249), (0x124E, 0x124F), (0x1257, 0x1257),
            (0x1259, 0x1259), (0x125E, 0x125F), (0x1289, 0x1289), (0x128E, 0x128F),
            (0x12B1, 0x12B1), (0x12B6, 0x12B7), (0x12BF, 0x12BF), (0x12C1, 0x12C1),
            (0x12C6, 0x12C7), (0x12D7, 0x12D7), (0x1311, 0x1311), (0x1316, 0x1317),
            (0x135B, 0x137F), (0x1390, 0x139F), (0x13F6, 0x13F7), (0x13FE, 0x1400),
            (0x166D, 0x166E), (0x1680, 0x1680), (0x169B, 0x169F), (0x16EB, 0x16ED),
            (0x16F9, 0x16FF), (0x1712, 0x171E), (0x1732, 0x173F), (0x1752, 0x175F),
            (0x176D, 0x176D), (0x1771, 0x181F), (0x1879, 0x187F), (0x1885, 0x1886),
            (0x18A9, 0x18A9), (0x18AB, 0x18AF), (0x18F6, 0x18FF), (0x191F, 0x19FF),
            (0x1A17, 0x1B04), (0x1B34, 0x1B44), (0x1B4D, 0x1B82), (0x1BA1, 0x1BAD),
            (0x1BB0, 0x1BB9), (0x1BE6, 0x1BFF), (0x1C24, 0x1C4C), (0x1C50, 0x1C59),
            (0x1C7E, 0x1C7F), (0x1C8B, 0x1C8F), (0x1CBB, 0x1CBC), (0x1CC0, 0x1CE8),
            (0x1CED, 0x1CED), (0x1CF4, 0x1CF4), (0x1CF7, 0x1CF9), (0x1CFB, 0x1CFF),
            (0x1DC0, 0x1DFF), (0x1F16, 0x1F17), (0x1F1E, 0x1F1F), (0x1F46, 0x1F47),
            (0x1F4E, 0x1F4F), (0x1F58, 0x1F58), (0x1F5A, 0x1F5A), (0x1F5C, 0x1F5C),
            (0x1F5E, 0x1F5E), (0x1F7E, 0x1F7F), (0x1FB5, 0x1FB5), (0x1FBD, 0x1FBD),
            (0x1FBF, 0x1FC1), (0x1FC5, 0x1FC5), (0x1FCD, 0x1FCF), (0x1FD4, 0x1FD5),
            (0x1FDC, 0x1FDF), (0x1FED, 0x1FF1), (0x1FF5, 0x1FF5), (0x1FFD, 0x2070),
            (0x2072, 0x207E), (0x2080, 0x208F), (0x209D, 0x2101), (0x2103, 0x2106),
            (0x2108, 0x2109), (0x2114, 0x2114), (0x2116, 0x2118), (0x211E, 0x2123),
            (0x2125, 0x2125), (0x2127, 0x2127), (0x2129, 0x2129), (0x212E, 0x212E),
            (0x213A, 0x213B), (0x2140, 0x2144), (0x214A, 0x214D), (0x214F, 0x215F),
            (0x2189, 0x24B5), (0x24EA, 0x2BFF), (0x2CE5, 0x2CEA), (0x2CEF, 0x2CF1),
            (0x2CF4, 0x2CFF), (0x2D26, 0x2D26), (0x2D28, 0x2D2C), (0x2D2E, 0x2D2F),
            (0x2D68, 0x2D6E), (0x2D70, 0x2D7F), (0x2D97, 0x2D9F), (0x2DA7, 0x2DA7),
            (0x2DAF, 0x2DAF), (0x2DB7, 0x2DB7), (0x2DBF, 0x2DBF), (0x2DC7, 0x2DC7),
            (0x2DCF, 0x2DCF), (0x2DD7, 0x2DD7), (0x2DDF, 0x2E2E), (0x2E30, 0x3004),
            (0x3006, 0x303A), (0x303D, 0x3104), (0x3130, 0x3130), (0x318F, 0x319F),
            (0x31C0, 0x9FFF), (0xA48D, 0xA4CF), (0xA4FE, 0xA4FF), (0xA60D, 0xA60F),
            (0xA620, 0xA629), (0xA62C, 0xA63F), (0xA66F, 0xA67E), (0xA69E, 0xA69F),
            (0xA6F0, 0xA707), (0xA7DD, 0xA7F0), (0xA802, 0xA802), (0xA806, 0xA806),
            (0xA80B, 0xA80B), (0xA823, 0xA83F), (0xA874, 0xA881), (0xA8B4, 0xA8F1),
            (0xA8F8, 0xA8FA), (0xA8FC, 0xA8FC), (0xA8FF, 0xA909), (0xA926, 0xA92F),
            (0xA947, 0xA95F), (0xA97D, 0xA983), (0xA9B3, 0xA9CE), (0xA9D0, 0xA9FF),
            (0xAA29, 0xAA3F), (0xAA43, 0xAA43), (0xAA4C, 0xAADF), (0xAAEB, 0xAAF1),
            (0xAAF5, 0xAB00), (0xAB07, 0xAB08), (0xAB0F, 0xAB10), (0xAB17, 0xAB1F),
            (0xAB27, 0xAB27), (0xAB2F, 0xAB2F), (0xAB6A, 0xAB6F), (0xABE3, 0xABFF),
            (0xD7A4, 0xD7AF), (0xD7C7, 0xD7CA), (0xD7FC, 0xFAFF), (0xFB07, 0xFB12),
            (0xFB18, 0xFB4F), (0xFBB2, 0xFBD2), (0xFD3E, 0xFD4F), (0xFD90, 0xFD91),
            (0xFDC8, 0xFDEF), (0xFDFC, 0xFE6F), (0xFE75, 0xFE75), (0xFEFD, 0xFF20),
            (0xFF3B, 0xFF40), (0xFF5B, 0xFF9F), (0xFFBF, 0xFFC1), (0xFFC8, 0xFFC9),
            (0xFFD0, 0xFFD1), (0xFFD8, 0xFFD9), (0xFFDD, 0xFFFF), (0x1000C, 0x1000C),
            (0x10027, 0x10027), (0x1003B, 0x1003B), (0x1003E, 0x1003E), (0x1004E, 0x1004F),
            (0x1005E, 0x1007F), (0x100FB, 0x1013F), (0x10175, 0x1027F), (0x1029D, 0x1029F),
            (0x102D1, 0x102FF), (0x10320, 0x1032C), (0x1034B, 0x1034F), (0x10376, 0x1037F),
            (0x1039E, 0x1039F), (0x103C4, 0x103C7), (0x103D0, 0x103D0), (0x103D6, 0x103FF),
            (0x1049E, 0x104AF), (0x104D4, 0x104D7), (0x104FC, 0x104FF), (0x10528, 0x1052F),
            (0x10564, 0x1056F), (0x1057B, 0x1057B), (0x1058B, 0x1058B), (0x10593, 0x10593),
            (0x10596, 0x10596), (0x105A2, 0x105A2), (0x105B2, 0x105B2), (0x105BA, 0x105BA),
            (0x105BD, 0x105BF), (0x105F4, 0x105FF), (0x10737, 0x1073F), (0x10756, 0x1075F),
            (0x10768, 0x1077F), (0x10786, 0x10786), (0x107B1, 0x107B1), (0x107BB, 0x107FF),
            (0x10806, 0x10807), (0x10809, 0x10809), (0x10836, 0x10836), (0x10839, 0x1083B),
            (0x1083D, 0x1083E), (0x10856, 0x1085F), (0x10877, 0x1087F), (0x1089F, 0x108DF),
            (0x108F3, 0x108F3), (0x108F6, 0x108FF), (0x10916, 0x1091F), (0x1093A, 0x1093F),
            (0x1095A, 0x1097F), (0x109B8, 0x109BD), (0x109C0, 0x109FF), (0x10A01, 0x10A0F),
            (0x10A14, 0x10A14), (0x10A18, 0x10A18), (0x10A36, 0x10A5F), (0x10A7D, 0x10A7F),
            (0x10A9D, 0x10ABF), (0x10AC8, 0x10AC8), (0x10AE5, 0x10AFF), (0x10B36, 0x10B3F),
            (0x10B56, 0x10B5F), (0x10B73, 0x10B7F), (0x10B92, 0x10BFF), (0x10C49, 0x10C7F),
            (0x10CB3, 0x10CBF), (0x10CF3, 0x10CFF), (0x10D24, 0x10D49), (0x10D66, 0x10D6E),
            (0x10D86, 0x10E7F), (0x10EAA, 0x10EAF), (0x10EB2, 0x10EC1), (0x10EC8, 0x10EFF),
            (0x10F1D, 0x10F26), (0x10F28, 0x10F2F), (0x10F46, 0x10F6F), (0x10F82, 0x10FAF),
            (0x10FC5, 0x10FDF), (0x10FF7, 0x11002), (0x11038, 0x11070), (0x11073, 0x11074),
            (0x11076, 0x11082), (0x110B0, 0x110CF), (0x110E9, 0x11102), (0x11127, 0x11143),
            (0x11145, 0x11146), (0x11148, 0x1114F), (0x11173, 0x11175), (0x11177, 0x11182),
            (0x111B3, 0x111C0), (0x111C5, 0x111D9), (0x111DB, 0x111DB), (0x111DD, 0x111FF),
            (0x11212, 0x11212), (0x1122C, 0x1123E), (0x11241, 0x1127F), (0x11287, 0x11287),
            (0x11289, 0x11289), (0x1128E, 0x1128E), (0x1129E, 0x1129E), (0x112A9, 0x112AF),
            (0x112DF, 0x11304), (0x1130D, 0x1130E), (0x11311, 0x11312), (0x11329, 0x11329),
            (0x11331, 0x11331), (0x11334, 0x11334), (0x1133A, 0x1133C), (0x1133E, 0x1134F),
            (0x11351, 0x1135C), (0x11362, 0x1137F), (0x1138A, 0x1138A), (0x1138C, 0x1138D),
            (0x1138F, 0x1138F), (0x113B6, 0x113B6), (0x113B8, 0x113D0), (0x113D2, 0x113D2),
            (0x113D4, 0x113FF), (0x11435, 0x11446), (0x1144B, 0x1145E), (0x11462, 0x1147F),
            (0x114B0, 0x114C3), (0x114C6, 0x114C6), (0x114C8, 0x1157F), (0x115AF, 0x115D7),
            (0x115DC, 0x115FF), (0x11630, 0x11643), (0x11645, 0x1167F), (0x116AB, 0x116B7),
            (0x116B9, 0x117FF), (0x1182C, 0x1189F), (0x118E0, 0x118FE), (0x11907, 0x11908),
            (0x1190A, 0x1190B), (0x11914, 0x11914), (0x11917, 0x11917), (0x11930, 0x1193E),
            (0x11940, 0x11940), (0x11942, 0x1199F), (0x119A8, 0x119A9), (0x119D1, 0x119E0),
            (0x119E2, 0x119E2), (0x119E4, 0x119FF), (0x11A01, 0x11A0A), (0x11A33, 0x11A39),
            (0x11A3B, 0x11A4F), (0x11A51, 0x11A5B), (0x11A8A, 0x11A9C), (0x11A9E, 0x11AAF),
            (0x11AF9, 0x11BBF), (0x11BE1, 0x11BFF), (0x11C09, 0x11C09), (0x11C2F, 0x11C3F),
            (0x11C41, 0x11C71), (0x11C90, 0x11CFF), (0x11D07, 0x11D07), (0x11D0A, 0x11D0A),
            (0x11D31, 0x11D45), (0x11D47, 0x11D5F), (0x11D66, 0x11D66), (0x11D69, 0x11D69),
            (0x11D8A, 0x11D97), (0x11D99, 0x11DAF), (0x11DDC, 0x11EDF), (0x11EF3, 0x11F01),
            (0x11F03, 0x11F03), (0x11F11, 0x11F11), (0x11F34, 0x11FAF), (0x11FB1, 0x11FFF),
            (0x1239A, 0x123FF), (0x1246F, 0x1247F), (0x12544, 0x12F8F), (0x12FF1, 0x12FFF),
            (0x13430, 0x13440), (0x13447, 0x1345F), (0x143FB, 0x143FF), (0x14647, 0x160FF),
            (0x1611E, 0x167FF), (0x16A39, 0x16A3F), (0x16A5F, 0x16A6F), (0x16ABF, 0x16ACF),
            (0x16AEE, 0x16AFF), (0x16B30, 0x16B3F), (0x16B44, 0x16B62), (0x16B78, 0x16B7C),
            (0x16B90, 0x16D3F), (0x16D6D, 0x16E3F), (0x16E80, 0x16E9F), (0x16EB9, 0x16EBA),
            (0x16ED4, 0x16EFF), (0x16F4B, 0x16F4F), (0x16F51, 0x16F92), (0x16FA0, 0x16FDF),
            (0x16FE2, 0x16FE2), (0x16FE4, 0x1BBFF), (0x1BC6B, 0x1BC6F), (0x1BC7D, 0x1BC7F),
            (0x1BC89, 0x1BC8F), (0x1BC9A, 0x1D3FF), (0x1D455, 0x1D455), (0x1D49D, 0x1D49D),
            (0x1D4A0, 0x1D4A1), (0x1D4A3, 0x1D4A4), (0x1D4A7, 0x1D4A8), (0x1D4AD, 0x1D4AD),
            (0x1D4BA, 0x1D4BA), (0x1D4BC, 0x1D4BC), (0x1D4C4, 0x1D4C4), (0x1D506, 0x1D506),
            (0x1D50B, 0x1D50C), (0x1D515, 0x1D515), (0x1D51D, 0x1D51D), (0x1D53A, 0x1D53A),
            (0x1D53F, 0x1D53F), (0x1D545, 0x1D545), (0x1D547, 0x1D549), (0x1D551, 0x1D551),
            (0x1D6A6, 0x1D6A7), (0x1D6C1, 0x1D6C1), (0x1D6DB, 0x1D6DB), (0x1D6FB, 0x1D6FB),
            (0x1D715, 0x1D715), (0x1D735, 0x1D735), (0x1D74F, 0x1D74F), (0x1D76F, 0x1D76F),
            (0x1D789, 0x1D789), (0x1D7A9, 0x1D7A9), (0x1D7C3, 0x1D7C3), (0x1D7CC, 0x1DEFF),
            (0x1DF1F, 0x1DF24), (0x1DF2B, 0x1E02F), (0x1E06E, 0x1E0FF), (0x1E12D, 0x1E136),
            (0x1E13E, 0x1E14D), (0x1E14F, 0x1E28F), (0x1E2AE, 0x1E2BF), (0x1E2EC, 0x1E4CF),
            (0x1E4EC, 0x1E5CF), (0x1E5EE, 0x1E5EF), (0x1E5F1, 0x1E6BF), (0x1E6DF, 0x1E6DF),
            (0x1E6E3, 0x1E6E3), (0x1E6E6, 0x1E6E6), (0x1E6EE, 0x1E6EF), (0x1E6F5, 0x1E6FD),
            (0x1E700, 0x1E7DF), (0x1E7E7, 0x1E7E7), (0x1E7EC, 0x1E7EC), (0x1E7EF, 0x1E7EF),
            (0x1E7FF, 0x1E7FF), (0x1E8C5, 0x1E8FF), (0x1E944, 0x1E94A), (0x1E94C, 0x1EDFF),
            (0x1EE04, 0x1EE04), (0x1EE20, 0x1EE20), (0x1EE23, 0x1EE23), (0x1EE25, 0x1EE26),
            (0x1EE28, 0x1EE28), (0x1EE33, 0x1EE33), (0x1EE38, 0x1EE38), (0x1EE3A, 0x1EE3A),
            (0x1EE3C, 0x1EE41), (0x1EE43, 0x1EE46), (0x1EE48, 0x1EE48), (0x1EE4A, 0x1EE4A),
            (0x1EE4C, 0x1EE4C), (0x1EE50, 0x1EE50), (0x1EE53, 0x1EE53), (0x1EE55, 0x1EE56),
            (0x1EE58, 0x1EE58), (0x1EE5A, 0x1EE5A), (0x1EE5C, 0x1EE5C), (0x1EE5E, 0x1EE5E),
            (0x1EE60, 0x1EE60), (0x1EE63, 0x1EE63), (0x1EE65, 0x1EE66), (0x1EE6B, 0x1EE6B),
            (0x1EE73, 0x1EE73), (0x1EE78, 0x1EE78), (0x1EE7D, 0x1EE7D), (0x1EE7F, 0x1EE7F),
            (0x1EE8A, 0x1EE8A), (0x1EE9C, 0x1EEA0), (0x1EEA4, 0x1EEA4), (0x1EEAA, 0x1EEAA),
            (0x1EEBC, 0x1F12F), (0x1F14A, 0x1F14F), (0x1F16A, 0x1F16F), (0x1F18A, 0x10FFFF),
        ])),
    ),
    (
        "^cr",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x000C), (0x000E, 0x10FFFF),
        ])),
    ),
    (
        "^doublequote",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0021), (0x0023, 0x10FFFF),
        ])),
    ),
    (
        "^ebase",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x10FFFF),
        ])),
    ),
    (
        "^ebasegaz",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x10FFFF),
        ])),
    ),
    (
        "^emodifier",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x10FFFF),
        ])),
    ),
    (
        "^extend",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x02FF), (0x0370, 0x0482), (0x048A, 0x0590), (0x05BE, 0x05BE),
            (0x05C0, 0x05C0), (0x05C3, 0x05C3), (0x05C6, 0x05C6), (0x05C8, 0x060F),
            (0x061B, 0x064A), (0x0660, 0x066F), (0x0671, 0x06D5), (0x06DD, 0x06DE),
            (0x06E5, 0x06E6), (0x06E9, 0x06E9), (0x06EE, 0x0710), (0x0712, 0x072F),
            (0x074B, 0x07A5), (0x07B1, 0x07EA), (0x07F4, 0x07FC), (0x07FE, 0x0815),
            (0x081A, 0x081A), (0x0824, 0x0824), (0x0828, 0x0828), (0x082E, 0x0858),
            (0x085C, 0x0896), (0x08A0, 0x08C9), (0x08E2, 0x08E2), (0x0904, 0x0939),
            (0x093D, 0x093D), (0x0950, 0x0950), (0x0958, 0x0961), (0x0964, 0x0980),
            (0x0984, 0x09BB), (0x09BD, 0x09BD), (0x09C5, 0x09C6), (0x09C9, 0x09CA),
            (0x09CE, 0x09D6), (0x09D8, 0x09E1), (0x09E4, 0x09FD), (0x09FF, 0x0A00),
            (0x0A04, 0x0A3B), (0x0A3D, 0x0A3D), (0x0A43, 0x0A46), (0x0A49, 0x0A4A),
            (0x0A4E, 0x0A50), (0x0A52, 0x0A6F), (0x0A72, 0x0A74), (0x0A76, 0x0A80),
            (0x0A84, 0x0ABB), (0x0ABD, 0x0ABD), (0x0AC6, 0x0AC6), (0x0ACA, 0x0ACA),
            (0x0ACE, 0x0AE1), (0x0AE4, 0x0AF9), (0x0B00, 0x0B00), (0x0B04, 0x0B3B),
            (0x0B3D, 0x0B3D), (0x0B45, 0x0B46), (0x0B49, 0x0B4A), (0x0B4E, 0x0B54),
            (0x0B58, 0x0B61), (0x0B64, 0x0B81), (0x0B83, 0x0BBD), (0x0BC3, 0x0BC5),
            (0x0BC9, 0x0BC9), (0x0BCE, 0x0BD6), (0x0BD8, 0x0BFF), (0x0C05, 0x0C3B),
            (0x0C3D, 0x0C3D), (0x0C45, 0x0C45), (0x0C49, 0x0C49), (0x0C4E, 0x0C54),
            (0x0C57, 0x0C61), (0x0C64, 0x0C80), (0x0C84, 0x0CBB), (0x0CBD, 0x0CBD),
            (0x0CC5, 0x0CC5), (0x0CC9, 0x0CC9), (0x0CCE, 0x0CD4), (0x0CD7, 0x0CE1),
            (0x0CE4, 0x0CF2), (0x0CF4, 0x0CFF), (0x0D04, 0x0D3A), (0x0D3D, 0x0D3D),
            (0x0D45, 0x0D45), (0x0D49, 0x0D49), (0x0D4E, 0x0D56), (0x0D58, 0x0D61),
            (0x0D64, 0x0D80), (0x0D84, 0x0DC9), (0x0DCB, 0x0DCE), (0x0DD5, 0x0DD5),
            (0x0DD7, 0x0DD7), (0x0DE0, 0x0DF1), (0x0DF4, 0x0E30), (0x0E32, 0x0E33),
            (0x0E3B, 0x0E46), (0x0E4F, 0x0EB0), (0x0EB2, 0x0EB3), (0x0EBD, 0x0EC7),
            (0x0ECF, 0x0F17), (0x0F1A, 0x0F34), (0x0F36, 0x0F36), (0x0F38, 0x0F38),
            (0x0F3A, 0x0F3D), (0x0F40, 0x0F70), (0x0F85, 0x0F85), (0x0F88, 0x0F8C),
            (0x0F98, 0x0F98), (0x0FBD, 0x0FC5), (0x0FC7, 0x102A), (0x103F, 0x1055),
            (0x105A, 0x105D), (0x1061, 0x1061), (0x1065, 0x1066), (0x106E, 0x1070),
            (0x1075, 0x1081), (0x108E, 0x108E), (0x1090, 0x1099), (0x109E, 0x135C),
            (0x1360, 0x1711), (0x1716, 0x1731), (0x1735, 0x1751), (0x1754, 0x1771),
            (0x1774, 0x17B3), (0x17D4, 0x17DC), (0x17DE, 0x180A), (0x180E, 0x180E),
            (0x1810, 0x1884), (0x1887, 0x18A8), (0x18AA, 0x191F), (0x192C, 0x192F),
            (0x193C, 0x1A16), (0x1A1C, 0x1A54), (0x1A5F, 0x1A5F), (0x1A7D, 0x1A7E),
            (0x1A80, 0x1AAF), (0x1ADE, 0x1ADF), (0x1AEC, 0x1AFF), (0x1B05, 0x1B33),
            (0x1B45, 0x1B6A), (0x1B74, 0x1B7F), (0x1B83, 0x1BA0), (0x1BAE, 0x1BE5),
            (0x1BF4, 0x1C23), (0x1C38, 0x1CCF), (0x1CD3, 0x1CD3), (0x1CE9, 0x1CEC),
            (0x1CEE, 0x1CF3), (0x1CF5, 0x1CF6), (0x1CFA, 0x1DBF), (0x1E00, 0x200B),
            (0x200D, 0x20CF), (0x20F1, 0x2CEE), (0x2CF2, 0x2D7E), (0x2D80, 0x2DDF),
            (0x2E00, 0x3029), (0x3030, 0x3098), (0x309B, 0xA66E), (0xA673, 0xA673),
            (0xA67E, 0xA69D), (0xA6A0, 0xA6EF), (0xA6F2, 0xA801), (0xA803, 0xA805),
            (0xA807, 0xA80A), (0xA80C, 0xA822), (0xA828, 0xA82B), (0xA82D, 0xA87F),
            (0xA882, 0xA8B3), (0xA8C6, 0xA8DF), (0xA8F2, 0xA8FE), (0xA900, 0xA925),
            (0xA92E, 0xA946), (0xA954, 0xA97F), (0xA984, 0xA9B2), (0xA9C1, 0xA9E4),
            (0xA9E6, 0xAA28), (0xAA37, 0xAA42), (0xAA44, 0xAA4B), (0xAA4E, 0xAA7A),
            (0xAA7E, 0xAAAF), (0xAAB1, 0xAAB1), (0xAAB5, 0xAAB6), (0xAAB9, 0xAABD),
            (0xAAC0, 0xAAC0), (0xAAC2, 0xAAEA), (0xAAF0, 0xAAF4), (0xAAF7, 0xABE2),
            (0xABEB, 0xABEB), (0xABEE, 0xFB1D), (0xFB1F, 0xFDFF), (0xFE10, 0xFE1F),
            (0xFE30, 0xFF9D), (0xFFA0, 0x101FC), (0x101FE, 0x102DF), (0x102E1, 0x10375),
            (0x1037B, 0x10A00), (0x10A04, 0x10A04), (0x10A07, 0x10A0B), (0x10A10, 0x10A37),
            (0x10A3B, 0x10A3E), (0x10A40, 0x10AE4), (0x10AE7, 0x10D23), (0x10D28, 0x10D68),
            (0x10D6E, 0x10EAA), (0x10EAD, 0x10EF9), (0x10F00, 0x10F45), (0x10F51, 0x10F81),
            (0x10F86, 0x10FFF), (0x11003, 0x11037), (0x11047, 0x1106F), (0x11071, 0x11072),
            (0x11075, 0x1107E), (0x11083, 0x110AF), (0x110BB, 0x110C1), (0x110C3, 0x110FF),
            (0x11103, 0x11126), (0x11135, 0x11144), (0x11147, 0x11172), (0x11174, 0x1117F),
            (0x11183, 0x111B2), (0x111C1, 0x111C8), (0x111CD, 0x111CD), (0x111D0, 0x1122B),
            (0x11238, 0x1123D), (0x1123F, 0x11240), (0x11242, 0x112DE), (0x112EB, 0x112FF),
            (0x11304, 0x1133A), (0x1133D, 0x1133D), (0x11345, 0x11346), (0x11349, 0x1134A),
            (0x1134E, 0x11356), (0x11358, 0x11361), (0x11364, 0x11365), (0x1136D, 0x1136F),
            (0x11375, 0x113B7), (0x113C1, 0x113C1), (0x113C3, 0x113C4), (0x113C6, 0x113C6),
            (0x113CB, 0x113CB), (0x113D1, 0x113D1), (0x113D3, 0x113E0), (0x113E3, 0x11434),
            (0x11447, 0x1145D), (0x1145F, 0x114AF), (0x114C4, 0x115AE), (0x115B6, 0x115B7),
            (0x115C1, 0x115DB), (0x115DE, 0x1162F), (0x11641, 0x116AA), (0x116B8, 0x1171C),
            (0x1172C, 0x1182B), (0x1183B, 0x1192F), (0x11936, 0x11936), (0x11939, 0x1193A),
            (0x1193F, 0x1193F), (0x11941, 0x11941), (0x11944, 0x119D0), (0x119D8, 0x119D9),
            (0x119E1, 0x119E3), (0x119E5, 0x11A00), (0x11A0B, 0x11A32), (0x11A3A, 0x11A3A),
            (0x11A3F, 0x11A46), (0x11A48, 0x11A50), (0x11A5C, 0x11A89), (0x11A9A, 0x11B5F),
            (0x11B68, 0x11C2E), (0x11C37, 0x11C37), (0x11C40, 0x11C91), (0x11CA8, 0x11CA8),
            (0x11CB7, 0x11D30), (0x11D37, 0x11D39), (0x11D3B, 0x11D3B), (0x11D3E, 0x11D3E),
            (0x11D46, 0x11D46), (0x11D48, 0x11D89), (0x11D8F, 0x11D8F), (0x11D92, 0x11D92),
            (0x11D98, 0x11EF2), (0x11EF7, 0x11EFF), (0x11F02, 0x11F02), (0x11F04, 0x11F33),
            (0x11F3B, 0x11F3D), (0x11F43, 0x11F59), (0x11F5B, 0x1343F), (0x13441, 0x13446),
            (0x13456, 0x1611D), (0x16130, 0x16AEF), (0x16AF5, 0x16B2F), (0x16B37, 0x16F4E),
            (0x16F50, 0x16F50), (0x16F88, 0x16F8E), (0x16F93, 0x16FE3), (0x16FE5, 0x16FEF),
            (0x16FF2, 0x1BC9C), (0x1BC9F, 0x1CEFF), (0x1CF2E, 0x1CF2F), (0x1CF47, 0x1D164),
            (0x1D16A, 0x1D16C), (0x1D173, 0x1D17A), (0x1D183, 0x1D184), (0x1D18C, 0x1D1A9),
            (0x1D1AE, 0x1D241), (0x1D245, 0x1D9FF), (0x1DA37, 0x1DA3A), (0x1DA6D, 0x1DA74),
            (0x1DA76, 0x1DA83), (0x1DA85, 0x1DA9A), (0x1DAA0, 0x1DAA0), (0x1DAB0, 0x1DFFF),
            (0x1E007, 0x1E007), (0x1E019, 0x1E01A), (0x1E022, 0x1E022), (0x1E025, 0x1E025),
            (0x1E02B, 0x1E08E), (0x1E090, 0x1E12F), (0x1E137, 0x1E2AD), (0x1E2AF, 0x1E2EB),
            (0x1E2F0, 0x1E4EB), (0x1E4F0, 0x1E5ED), (0x1E5F0, 0x1E6E2), (0x1E6E4, 0x1E6E5),
            (0x1E6E7, 0x1E6ED), (0x1E6F0, 0x1E6F4), (0x1E6F6, 0x1E8CF), (0x1E8D7, 0x1E943),
            (0x1E94B, 0x1F3FA), (0x1F400, 0xE001F), (0xE0080, 0xE00FF), (0xE01F0, 0x10FFFF),
        ])),
    ),
    (
        "^extendnumlet",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x005E), (0x0060, 0x202E), (0x2030, 0x203E), (0x2041, 0x2053),
            (0x2055, 0xFE32), (0xFE35, 0xFE4C), (0xFE50, 0xFF3E), (0xFF40, 0x10FFFF),
        ])),
    ),
    (
        "^format",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x00AC), (0x00AE, 0x061B), (0x061D, 0x180D), (0x180F, 0x200D),
            (0x2010, 0x2029), (0x202F, 0x205F), (0x2065, 0x2065), (0x2070, 0xFEFE),
            (0xFF00, 0xFFF8), (0xFFFC, 0x1342F), (0x13440, 0x1BC9F), (0x1BCA4, 0x1D172),
            (0x1D17B, 0xE0000), (0xE0002, 0x10FFFF),
        ])),
    ),
    (
        "^glueafterzwj",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x10FFFF),
        ])),
    ),
    (
        "^hebrewletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x05CF), (0x05EB, 0x05EE), (0x05F3, 0xFB1C), (0xFB1E, 0xFB1E),
            (0xFB29, 0xFB29), (0xFB37, 0xFB37), (0xFB3D, 0xFB3D), (0xFB3F, 0xFB3F),
            (0xFB42, 0xFB42), (0xFB45, 0xFB45), (0xFB50, 0x10FFFF),
        ])),
    ),
    (
        "^katakana",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x3030), (0x3036, 0x309A), (0x309D, 0x309F), (0x30FB, 0x30FB),
            (0x3100, 0x31EF), (0x3200, 0x32CF), (0x32FF, 0x32FF), (0x3358, 0xFF65),
            (0xFF9E, 0x1AFEF), (0x1AFF4, 0x1AFF4), (0x1AFFC, 0x1AFFC), (0x1AFFF, 0x1AFFF),
            (0x1B001, 0x1B11F), (0x1B123, 0x1B154), (0x1B156, 0x1B163), (0x1B168, 0x10FFFF),
        ])),
    ),
    (
        "^lf",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0009), (0x000B, 0x10FFFF),
        ])),
    ),
    (
        "^midletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0039), (0x003B, 0x00B6), (0x00B8, 0x0386), (0x0388, 0x055E),
            (0x0560, 0x05F3), (0x05F5, 0x2026), (0x2028, 0xFE12), (0xFE14, 0xFE54),
            (0xFE56, 0xFF19), (0xFF1B, 0x10FFFF),
        ])),
    ),
    (
        "^midnum",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002B), (0x002D, 0x003A), (0x003C, 0x037D), (0x037F, 0x0588),
            (0x058A, 0x060B), (0x060E, 0x066B), (0x066D, 0x07F7), (0x07F9, 0x2043),
            (0x2045, 0xFE4F), (0xFE51, 0xFE53), (0xFE55, 0xFF0B), (0xFF0D, 0xFF1A),
            (0xFF1C, 0x10FFFF),
        ])),
    ),
    (
        "^midnumlet",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002D), (0x002F, 0x2017), (0x201A, 0x2023), (0x2025, 0xFE51),
            (0xFE53, 0xFF06), (0xFF08, 0xFF0D), (0xFF0F, 0x10FFFF),
        ])),
    ),
    (
        "^newline",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x000A), (0x000D, 0x0084), (0x0086, 0x2027), (0x202A, 0x10FFFF),
        ])),
    ),
    (
        "^numeric",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002F), (0x003A, 0x05FF), (0x0606, 0x065F), (0x066A, 0x066A),
            (0x066C, 0x06DC), (0x06DE, 0x06EF), (0x06FA, 0x07BF), (0x07CA, 0x088F),
            (0x0892, 0x08E1), (0x08E3, 0x0965), (0x0970, 0x09E5), (0x09F0, 0x0A65),
            (0x0A70, 0x0AE5), (0x0AF0, 0x0B65), (0x0B70, 0x0BE5), (0x0BF0, 0x0C65),
            (0x0C70, 0x0CE5), (0x0CF0, 0x0D65), (0x0D70, 0x0DE5), (0x0DF0, 0x0E4F),
            (0x0E5A, 0x0ECF), (0x0EDA, 0x0F1F), (0x0F2A, 0x103F), (0x104A, 0x108F),
            (0x109A, 0x17DF), (0x17EA, 0x180F), (0x181A, 0x1945), (0x1950, 0x19CF),
            (0x19DB, 0x1A7F), (0x1A8A, 0x1A8F), (0x1A9A, 0x1B4F), (0x1B5A, 0x1BAF),
            (0x1BBA, 0x1C3F), (0x1C4A, 0x1C4F), (0x1C5A, 0xA61F), (0xA62A, 0xA8CF),
            (0xA8DA, 0xA8FF), (0xA90A, 0xA9CF), (0xA9DA, 0xA9EF), (0xA9FA, 0xAA4F),
            (0xAA5A, 0xABEF), (0xABFA, 0xFF0F), (0xFF1A, 0x1049F), (0x104AA, 0x10D2F),
            (0x10D3A, 0x10D3F), (0x10D4A, 0x11065), (0x11070, 0x110BC), (0x110BE, 0x110CC),
            (0x110CE, 0x110EF), (0x110FA, 0x11135), (0x11140, 0x111CF), (0x111DA, 0x112EF),
            (0x112FA, 0x1144F), (0x1145A, 0x114CF), (0x114DA, 0x1164F), (0x1165A, 0x116BF),
            (0x116CA, 0x116CF), (0x116E4, 0x1172F), (0x1173A, 0x118DF), (0x118EA, 0x1194F),
            (0x1195A, 0x11BEF), (0x11BFA, 0x11C4F), (0x11C5A, 0x11D4F), (0x11D5A, 0x11D9F),
            (0x11DAA, 0x11DDF), (0x11DEA, 0x11F4F), (0x11F5A, 0x1612F), (0x1613A, 0x16A5F),
            (0x16A6A, 0x16ABF), (0x16ACA, 0x16B4F), (0x16B5A, 0x16D6F), (0x16D7A, 0x1CCEF),
            (0x1CCFA, 0x1D7CD), (0x1D800, 0x1E13F), (0x1E14A, 0x1E2EF), (0x1E2FA, 0x1E4EF),
            (0x1E4FA, 0x1E5F0), (0x1E5FB, 0x1E94F), (0x1E95A, 0x1FBEF), (0x1FBFA, 0x10FFFF),
        ])),
    ),
    (
        "^other",
        DatasetEntry::Class(CharClass::new(&[
            (0x000A, 0x000D), (0x0020, 0x0020), (0x0022, 0x0022), (0x0027, 0x0027),
            (0x002C, 0x002C), (0x002E, 0x002E), (0x0030, 0x003B), (0x0041, 0x005A),
            (0x005F, 0x005F), (0x0061, 0x007A), (0x0085, 0x0085), (0x00AA, 0x00AA),
            (0x00AD, 0x00AD), (0x00B5, 0x00B5), (0x00B7, 0x00B8), (0x00BA, 0x00BA),
            (0x00C0, 0x00D6), (0x00D8, 0x00F6), (0x00F8, 0x02D7), (0x02DE, 0x0374),
            (0x0376, 0x0377), (0x037A, 0x037F), (0x0386, 0x038A), (0x038C, 0x038C),
            (0x038E, 0x03A1), (0x03A3, 0x03F5), (0x03F7, 0x0481), (0x0483, 0x052F),
            (0x0531, 0x0556), (0x0559, 0x055C), (0x055E, 0x058A), (0x0591, 0x05BD),
            (0x05BF, 0x05BF), (0x05C1, 0x05C2), (0x05C4, 0x05C5), (0x05C7, 0x05C7),
            (0x05D0, 0x05EA), (0x05EF, 0x05F4), (0x0600, 0x0605), (0x060C, 0x060D),
            (0x0610, 0x061A), (0x061C, 0x061C), (0x0620, 0x0669), (0x066B, 0x066C),
            (0x066E, 0x06D3), (0x06D5, 0x06DD), (0x06DF, 0x06E8), (0x06EA, 0x06FC),
            (0x06FF, 0x06FF), (0x070F, 0x074A), (0x074D, 0x07B1), (0x07C0, 0x07F5),
            (0x07F8, 0x07F8), (0x07FA, 0x07FA), (0x07FD, 0x07FD), (0x0800, 0x082D),
            (0x0840, 0x085B), (0x0860, 0x086A), (0x0870, 0x0887), (0x0889, 0x0891),
            (0x0897, 0x0963), (0x0966, 0x096F), (0x0971, 0x0983), (0x0985, 0x098C),
            (0x098F, 0x0990), (0x0993, 0x09A8), (0x09AA, 0x09B0), (0x09B2, 0x09B2),
            (0x09B6, 0x09B9), (0x09BC, 0x09C4), (0x09C7, 0x09C8), (0x09CB, 0x09CE),
            (0x09D7, 0x09D7), (0x09DC, 0x09DD), (0x09DF, 0x09E3), (0x09E6, 0x09F1),
            (0x09FC, 0x09FC), (0x09FE, 0x09FE), (0x0A01, 0x0A03), (0x0A05, 0x0A0A),
            (0x0A0F, 0x0A10), (0x0A13, 0x0A28), (0x0A2A, 0x0A30), (0x0A32, 0x0A33),
            (0x0A35, 0x0A36), (0x0A38, 0x0A39), (0x0A3C, 0x0A3C), (0x0A3E, 0x0A42),
            (0x0A47, 0x0A48), (0x0A4B, 0x0A4D), (0x0A51, 0x0A51), (0x0A59, 0x0A5C),
            (0x0A5E, 0x0A5E), (0x0A66, 0x0A75), (0x0A81, 0x0A83), (0x0A85, 0x0A8D),
            (0x0A8F, 0x0A91), (0x0A93, 0x0AA8), (0x0AAA, 0x0AB0), (0x0AB2, 0x0AB3),
            (0x0AB5, 0x0AB9), (0x0ABC, 0x0AC5), (0x0AC7, 0x0AC9), (0x0ACB, 0x0ACD),
            (0x0AD0, 0x0AD0), (0x0AE0, 0x0AE3), (0x0AE6, 0x0AEF), (0x0AF9, 0x0AFF),
            (0x0B01, 0x0B03), (0x0B05, 0x0B0C), (0x0B0F, 0x0B10), (0x0B13, 0x0B28),
            (0x0B2A, 0x0B30), (0x0B32, 0x0B33), (0x0B35, 0x0B39), (0x0B3C, 0x0B44),
            (0x0B47, 0x0B48), (0x0B4B, 0x0B4D), (0x0B55, 0x0B57), (0x0B5C, 0x0B5D),
            (0x0B5F, 0x0B63), (0x0B66, 0x0B6F), (0x0B71, 0x0B71), (0x0B82, 0x0B83),
            (0x0B85, 0x0B8A), (0x0B8E, 0x0B90), (0x0B92, 0x0B95), (0x0B99, 0x0B9A),
            (0x0B9C, 0x0B9C), (0x0B9E, 0x0B9F), (0x0BA3, 0x0BA4), (0x0BA8, 0x0BAA),
            (0x0BAE, 0x0BB9), (0x0BBE, 0x0BC2), (0x0BC6, 0x0BC8), (0x0BCA, 0x0BCD),
            (0x0BD0, 0x0BD0), (0x0BD7, 0x0BD7), (0x0BE6, 0x0BEF), (0x0C00, 0x0C0C),
            (0x0C0E, 0x0C10), (0x0C12, 0x0C28), (0x0C2A, 0x0C39), (0x0C3C, 0x0C44),
            (0x0C46, 0x0C48), (0x0C4A, 0x0C4D), (0x0C55, 0x0C56), (0x0C58, 0x0C5A),
            (0x0C5C, 0x0C5D), (0x0C60, 0x0C63), (0x0C66, 0x0C6F), (0x0C80, 0x0C83),
            (0x0C85, 0x0C8C), (0x0C8E, 0x0C90), (0x0C92, 0x0CA8), (0x0CAA, 0x0CB3),
            (0x0CB5, 0x0CB9), (0x0CBC, 0x0CC4), (0x0CC6, 0x0CC8), (0x0CCA, 0x0CCD),
            (0x0CD5, 0x0CD6), (0x0CDC, 0x0CDE), (0x0CE0, 0x0CE3), (0x0CE6, 0x0CEF),
            (0x0CF1, 0x0CF3), (0x0D00, 0x0D0C), (0x0D0E, 0x0D10), (0x0D12, 0x0D44),
            (0x0D46, 0x0D48), (0x0D4A, 0x0D4E), (0x0D54, 0x0D57), (0x0D5F, 0x0D63),
            (0x0D66, 0x0D6F), (0x0D7A, 0x0D7F), (0x0D81, 0x0D83), (0x0D85, 0x0D96),
            (0x0D9A, 0x0DB1), (0x0DB3, 0x0DBB), (0x0DBD, 0x0DBD), (0x0DC0, 0x0DC6),
            (0x0DCA, 0x0DCA), (0x0DCF, 0x0DD4), (0x0DD6, 0x0DD6), (0x0DD8, 0x0DDF),
            (0x0DE6, 0x0DEF), (0x0DF2, 0x0DF3), (0x0E31, 0x0E31), (0x0E34, 0x0E3A),
            (0x0E47, 0x0E4E), (0x0E50, 0x0E59), (0x0EB1, 0x0EB1), (0x0EB4, 0x0EBC),
            (0x0EC8, 0x0ECE), (0x0ED0, 0x0ED9), (0x0F00, 0x0F00), (0x0F18, 0x0F19),
            (0x0F20, 0x0F29), (0x0F35, 0x0F35), (0x0F37, 0x0F37), (0x0F39, 0x0F39),
            (0x0F3E, 0x0F47), (0x0F49, 0x0F6C), (0x0F71, 0x0F84), (0x0F86, 0x0F97),
            (0x0F99, 0x0FBC), (0x0FC6, 0x0FC6), (0x102B, 0x103E), (0x1040, 0x1049),
            (0x1056, 0x1059), (0x105E, 0x1060), (0x1062, 0x1064), (0x1067, 0x106D),
            (0x1071, 0x1074), (0x1082, 0x108D), (0x108F, 0x109D), (0x10A0, 0x10C5),
            (0x10C7, 0x10C7), (0x10CD, 0x10CD), (0x10D0, 0x10FA), (0x10FC, 0x1248),
            (0x124A, 0x124D), (0x1250, 0x1256), (0x1258, 0x1258), (0x125A, 0x125D),
            (0x1260, 0x1288), (0x128A, 0x128D), (0x1290, 0x12B0), (0x12B2, 0x12B5),
            (0x12B8, 0x12BE), (0x12C0, 0x12C0), (0x12C2, 0x12C5), (0x12C8, 0x12D6),
            (0x12D8, 0x1310), (0x1312, 0x1315), (0x1318, 0x135A), (0x135D, 0x135F),
            (0x1380, 0x138F), (0x13A0, 0x13F5), (0x13F8, 0x13FD), (0x1401, 0x166C),
            (0x166F, 0x169A), (0x16A0, 0x16EA), (0x16EE, 0x16F8), (0x1700, 0x1715),
            (0x171F, 0x1734), (0x1740, 0x1753), (0x1760, 0x176C), (0x176E, 0x1770),
            (0x1772, 0x1773), (0x17B4, 0x17D3), (0x17DD, 0x17DD), (0x17E0, 0x17E9),
            (0x180B, 0x1819), (0x1820, 0x1878), (0x1880, 0x18AA), (0x18B0, 0x18F5),
            (0x1900, 0x191E), (0x1920, 0x192B), (0x1930, 0x193B), (0x1946, 0x194F),
            (0x19D0, 0x19DA), (0x1A00, 0x1A1B), (0x1A55, 0x1A5E), (0x1A60, 0x1A7C),
            (0x1A7F, 0x1A89), (0x1A90, 0x1A99), (0x1AB0, 0x1ADD), (0x1AE0, 0x1AEB),
            (0x1B00, 0x1B4C), (0x1B50, 0x1B59), (0x1B6B, 0x1B73), (0x1B80, 0x1BF3),
            (0x1C00, 0x1C37), (0x1C40, 0x1C49), (0x1C4D, 0x1C7D), (0x1C80, 0x1C8A),
            (0x1C90, 0x1CBA), (0x1CBD, 0x1CBF), (0x1CD0, 0x1CD2), (0x1CD4, 0x1CFA),
            (0x1D00, 0x1F15), (0x1F18, 0x1F1D), (0x1F20, 0x1F45), (0x1F48, 0x1F4D),
            (0x1F50, 0x1F57), (0x1F59, 0x1F59), (0x1F5B, 0x1F5B), (0x1F5D, 0x1F5D),
            (0x1F5F, 0x1F7D), (0x1F80, 0x1FB4), (0x1FB6, 0x1FBC), (0x1FBE, 0x1FBE),
            (0x1FC2, 0x1FC4), (0x1FC6, 0x1FCC), (0x1FD0, 0x1FD3), (0x1FD6, 0x1FDB),
            (0x1FE0, 0x1FEC), (0x1FF2, 0x1FF4), (0x1FF6, 0x1FFC), (0x2000, 0x2006),
            (0x2008, 0x200A), (0x200C, 0x200F), (0x2018, 0x2019), (0x2024, 0x2024),
            (0x2027, 0x202F), (0x203F, 0x2040), (0x2044, 0x2044), (0x2054, 0x2054),
            (0x205F, 0x2064), (0x2066, 0x206F), (0x2071, 0x2071), (0x207F, 0x207F),
            (0x2090, 0x209C), (0x20D0, 0x20F0), (0x2102, 0x2102), (0x2107, 0x2107),
            (0x210A, 0x2113), (0x2115, 0x2115), (0x2119, 0x211D), (0x2124, 0x2124),
            (0x2126, 0x2126), (0x2128, 0x2128), (0x212A, 0x212D), (0x212F, 0x2139),
            (0x213C, 0x213F), (0x2145, 0x2149), (0x214E, 0x214E), (0x2160, 0x2188),
            (0x24B6, 0x24E9), (0x2C00, 0x2CE4), (0x2CEB, 0x2CF3), (0x2D00, 0x2D25),
            (0x2D27, 0x2D27), (0x2D2D, 0x2D2D), (0x2D30, 0x2D67), (0x2D6F, 0x2D6F),
            (0x2D7F, 0x2D96), (0x2DA0, 0x2DA6), (0x2DA8, 0x2DAE), (0x2DB0, 0x2DB6),
            (0x2DB8, 0x2DBE), (0x2DC0, 0x2DC6), (0x2DC8, 0x2DCE), (0x2DD0, 0x2DD6),
            (0x2DD8, 0x2DDE), (0x2DE0, 0x2DFF), (0x2E2F, 0x2E2F), (0x3000, 0x3000),
            (0x3005, 0x3005), (0x302A, 0x302F), (0x3031, 0x3035), (0x303B, 0x303C),
            (0x3099, 0x309C), (0x30A0, 0x30FA), (0x30FC, 0x30FF), (0x3105, 0x312F),
            (0x3131, 0x318E), (0x31A0, 0x31BF), (0x31F0, 0x31FF), (0x32D0, 0x32FE),
            (0x3300, 0x3357), (0xA000, 0xA48C), (0xA4D0, 0xA4FD), (0xA500, 0xA60C),
            (0xA610, 0xA62B), (0xA640, 0xA672), (0xA674, 0xA67D), (0xA67F, 0xA6F1),
            (0xA708, 0xA7DC), (0xA7F1, 0xA827), (0xA82C, 0xA82C), (0xA840, 0xA873),
            (0xA880, 0xA8C5), (0xA8D0, 0xA8D9), (0xA8E0, 0xA8F7), (0xA8FB, 0xA8FB),
            (0xA8FD, 0xA92D), (0xA930, 0xA953), (0xA960, 0xA97C), (0xA980, 0xA9C0),
            (0xA9CF, 0xA9D9), (0xA9E5, 0xA9E5), (0xA9F0, 0xA9F9), (0xAA00, 0xAA36),
            (0xAA40, 0xAA4D), (0xAA50, 0xAA59), (0xAA7B, 0xAA7D), (0xAAB0, 0xAAB0),
            (0xAAB2, 0xAAB4), (0xAAB7, 0xAAB8), (0xAABE, 0xAABF), (0xAAC1, 0xAAC1),
            (0xAAE0, 0xAAEF), (0xAAF2, 0xAAF6), (0xAB01, 0xAB06), (0xAB09, 0xAB0E),
            (0xAB11, 0xAB16), (0xAB20, 0xAB26), (0xAB28, 0xAB2E), (0xAB30, 0xAB69),
            (0xAB70, 0xABEA), (0xABEC, 0xABED), (0xABF0, 0xABF9), (0xAC00, 0xD7A3),
            (0xD7B0, 0xD7C6), (0xD7CB, 0xD7FB), (0xFB00, 0xFB06), (0xFB13, 0xFB17),
            (0xFB1D, 0xFB28), (0xFB2A, 0xFB36), (0xFB38, 0xFB3C), (0xFB3E, 0xFB3E),
            (0xFB40, 0xFB41), (0xFB43, 0xFB44), (0xFB46, 0xFBB1), (0xFBD3, 0xFD3D),
            (0xFD50, 0xFD8F), (0xFD92, 0xFDC7), (0xFDF0, 0xFDFB), (0xFE00, 0xFE0F),
            (0xFE13, 0xFE13), (0xFE20, 0xFE2F), (0xFE33, 0xFE34), (0xFE4D, 0xFE50),
            (0xFE52, 0xFE52), (0xFE54, 0xFE55), (0xFE70, 0xFE74), (0xFE76, 0xFEFC),
            (0xFEFF, 0xFEFF), (0xFF07, 0xFF07), (0xFF0C, 0xFF0C), (0xFF0E, 0xFF0E),
            (0xFF10, 0xFF1B), (0xFF21, 0xFF3A), (0xFF3F, 0xFF3F), (0xFF41, 0xFF5A),
            (0xFF66, 0xFFBE), (0xFFC2, 0xFFC7), (0xFFCA, 0xFFCF), (0xFFD2, 0xFFD7),
            (0xFFDA, 0xFFDC), (0xFFF9, 0xFFFB), (0x10000, 0x1000B), (0x1000D, 0x10026),
            (0x10028, 0x1003A), (0x1003C, 0x1003D), (0x1003F, 0x1004D), (0x10050, 0x1005D),
            (0x10080, 0x100FA), (0x10140, 0x10174), (0x101FD, 0x101FD), (0x10280, 0x1029C),
            (0x102A0, 0x102D0), (0x102E0, 0x102E0), (0x10300, 0x1031F), (0x1032D, 0x1034A),
            (0x10350, 0x1037A), (0x10380, 0x1039D), (0x103A0, 0x103C3), (0x103C8, 0x103CF),
            (0x103D1, 0x103D5), (0x10400, 0x1049D), (0x104A0, 0x104A9), (0x104B0, 0x104D3),
            (0x104D8, 0x104FB), (0x10500, 0x10527), (0x10530, 0x10563), (0x10570, 0x1057A),
            (0x1057C, 0x1058A), (0x1058C, 0x10592), (0x10594, 0x10595), (0x10597, 0x105A1),
            (0x105A3, 0x105B1), (0x105B3, 0x105B9), (0x105BB, 0x105BC), (0x105C0, 0x105F3),
            (0x10600, 0x10736), (0x10740, 0x10755), (0x10760, 0x10767), (0x10780, 0x10785),
            (0x10787, 0x107B0), (0x107B2, 0x107BA), (0x10800, 0x10805), (0x10808, 0x10808),
            (0x1080A, 0x10835), (0x10837, 0x10838), (0x1083C, 0x1083C), (0x1083F, 0x10855),
            (0x10860, 0x10876), (0x10880, 0x1089E), (0x108E0, 0x108F2), (0x108F4, 0x108F5),
            (0x10900, 0x10915), (0x10920, 0x10939), (0x10940, 0x10959), (0x10980, 0x109B7),
            (0x109BE, 0x109BF), (0x10A00, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A13),
            (0x10A15, 0x10A17), (0x10A19, 0x10A35), (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F),
            (0x10A60, 0x10A7C), (0x10A80, 0x10A9C), (0x10AC0, 0x10AC7), (0x10AC9, 0x10AE6),
            (0x10B00, 0x10B35), (0x10B40, 0x10B55), (0x10B60, 0x10B72), (0x10B80, 0x10B91),
            (0x10C00, 0x10C48), (0x10C80, 0x10CB2), (0x10CC0, 0x10CF2), (0x10D00, 0x10D27),
            (0x10D30, 0x10D39), (0x10D40, 0x10D65), (0x10D69, 0x10D6D), (0x10D6F, 0x10D85),
            (0x10E80, 0x10EA9), (0x10EAB, 0x10EAC), (0x10EB0, 0x10EB1), (0x10EC2, 0x10EC7),
            (0x10EFA, 0x10F1C), (0x10F27, 0x10F27), (0x10F30, 0x10F50), (0x10F70, 0x10F85),
            (0x10FB0, 0x10FC4), (0x10FE0, 0x10FF6), (0x11000, 0x11046), (0x11066, 0x11075),
            (0x1107F, 0x110BA), (0x110BD, 0x110BD), (0x110C2, 0x110C2), (0x110CD, 0x110CD),
            (0x110D0, 0x110E8), (0x110F0, 0x110F9), (0x11100, 0x11134), (0x11136, 0x1113F),
            (0x11144, 0x11147), (0x11150, 0x11173), (0x11176, 0x11176), (0x11180, 0x111C4),
            (0x111C9, 0x111CC), (0x111CE, 0x111DA), (0x111DC, 0x111DC), (0x11200, 0x11211),
            (0x11213, 0x11237), (0x1123E, 0x11241), (0x11280, 0x11286), (0x11288, 0x11288),
            (0x1128A, 0x1128D), (0x1128F, 0x1129D), (0x1129F, 0x112A8), (0x112B0, 0x112EA),
            (0x112F0, 0x112F9), (0x11300, 0x11303), (0x11305, 0x1130C), (0x1130F, 0x11310),
            (0x11313, 0x11328), (0x1132A, 0x11330), (0x11332, 0x11333), (0x11335, 0x11339),
            (0x1133B, 0x11344), (0x11347, 0x11348), (0x1134B, 0x1134D), (0x11350, 0x11350),
            (0x11357, 0x11357), (0x1135D, 0x11363), (0x11366, 0x1136C), (0x11370, 0x11374),
            (0x11380, 0x11389), (0x1138B, 0x1138B), (0x1138E, 0x1138E), (0x11390, 0x113B5),
            (0x113B7, 0x113C0), (0x113C2, 0x113C2), (0x113C5, 0x113C5), (0x113C7, 0x113CA),
            (0x113CC, 0x113D3), (0x113E1, 0x113E2), (0x11400, 0x1144A), (0x11450, 0x11459),
            (0x1145E, 0x11461), (0x11480, 0x114C5), (0x114C7, 0x114C7), (0x114D0, 0x114D9),
            (0x11580, 0x115B5), (0x115B8, 0x115C0), (0x115D8, 0x115DD), (0x11600, 0x11640),
            (0x11644, 0x11644), (0x11650, 0x11659), (0x11680, 0x116B8), (0x116C0, 0x116C9),
            (0x116D0, 0x116E3), (0x1171D, 0x1172B), (0x11730, 0x11739), (0x11800, 0x1183A),
            (0x118A0, 0x118E9), (0x118FF, 0x11906), (0x11909, 0x11909), (0x1190C, 0x11913),
            (0x11915, 0x11916), (0x11918, 0x11935), (0x11937, 0x11938), (0x1193B, 0x11943),
            (0x11950, 0x11959), (0x119A0, 0x119A7), (0x119AA, 0x119D7), (0x119DA, 0x119E1),
            (0x119E3, 0x119E4), (0x11A00, 0x11A3E), (0x11A47, 0x11A47), (0x11A50, 0x11A99),
            (0x11A9D, 0x11A9D), (0x11AB0, 0x11AF8), (0x11B60, 0x11B67), (0x11BC0, 0x11BE0),
            (0x11BF0, 0x11BF9), (0x11C00, 0x11C08), (0x11C0A, 0x11C36), (0x11C38, 0x11C40),
            (0x11C50, 0x11C59), (0x11C72, 0x11C8F), (0x11C92, 0x11CA7), (0x11CA9, 0x11CB6),
            (0x11D00, 0x11D06), (0x11D08, 0x11D09), (0x11D0B, 0x11D36), (0x11D3A, 0x11D3A),
            (0x11D3C, 0x11D3D), (0x11D3F, 0x11D47), (0x11D50, 0x11D59), (0x11D60, 0x11D65),
            (0x11D67, 0x11D68), (0x11D6A, 0x11D8E), (0x11D90, 0x11D91), (0x11D93, 0x11D98),
            (0x11DA0, 0x11DA9), (0x11DB0, 0x11DDB), (0x11DE0, 0x11DE9), (0x11EE0, 0x11EF6),
            (0x11F00, 0x11F10), (0x11F12, 0x11F3A), (0x11F3E, 0x11F42), (0x11F50, 0x11F5A),
            (0x11FB0, 0x11FB0), (0x12000, 0x12399), (0x12400, 0x1246E), (0x12480, 0x12543),
            (0x12F90, 0x12FF0), (0x13000, 0x13455), (0x13460, 0x143FA), (0x14400, 0x14646),
            (0x16100, 0x16139), (0x16800, 0x16A38), (0x16A40, 0x16A5E), (0x16A60, 0x16A69),
            (0x16A70, 0x16ABE), (0x16AC0, 0x16AC9), (0x16AD0, 0x16AED), (0x16AF0, 0x16AF4),
            (0x16B00, 0x16B36), (0x16B40, 0x16B43), (0x16B50, 0x16B59), (0x16B63, 0x16B77),
            (0x16B7D, 0x16B8F), (0x16D40, 0x16D6C), (0x16D70, 0x16D79), (0x16E40, 0x16E7F),
            (0x16EA0, 0x16EB8), (0x16EBB, 0x16ED3), (0x16F00, 0x16F4A), (0x16F4F, 0x16F87),
            (0x16F8F, 0x16F9F), (0x16FE0, 0x16FE1), (0x16FE3, 0x16FE4), (0x16FF0, 0x16FF1),
            (0x1AFF0, 0x1AFF3), (0x1AFF5, 0x1AFFB), (0x1AFFD, 0x1AFFE), (0x1B000, 0x1B000),
            (0x1B120, 0x1B122), (0x1B155, 0x1B155), (0x1B164, 0x1B167), (0x1BC00, 0x1BC6A),
            (0x1BC70, 0x1BC7C), (0x1BC80, 0x1BC88), (0x1BC90, 0x1BC99), (0x1BC9D, 0x1BC9E),
            (0x1BCA0, 0x1BCA3), (0x1CCF0, 0x1CCF9), (0x1CF00, 0x1CF2D), (0x1CF30, 0x1CF46),
            (0x1D165, 0x1D169), (0x1D16D, 0x1D182), (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD),
            (0x1D242, 0x1D244), (0x1D400, 0x1D454), (0x1D456, 0x1D49C), (0x1D49E, 0x1D49F),
            (0x1D4A2, 0x1D4A2), (0x1D4A5, 0x1D4A6), (0x1D4A9, 0x1D4AC), (0x1D4AE, 0x1D4B9),
            (0x1D4BB, 0x1D4BB), (0x1D4BD, 0x1D4C3), (0x1D4C5, 0x1D505), (0x1D507, 0x1D50A),
            (0x1D50D, 0x1D514), (0x1D516, 0x1D51C), (0x1D51E, 0x1D539), (0x1D53B, 0x1D53E),
            (0x1D540, 0x1D544), (0x1D546, 0x1D546), (0x1D54A, 0x1D550), (0x1D552, 0x1D6A5),
            (0x1D6A8, 0x1D6C0), (0x1D6C2, 0x1D6DA), (0x1D6DC, 0x1D6FA), (0x1D6FC, 0x1D714),
            (0x1D716, 0x1D734), (0x1D736, 0x1D74E), (0x1D750, 0x1D76E), (0x1D770, 0x1D788),
            (0x1D78A, 0x1D7A8), (0x1D7AA, 0x1D7C2), (0x1D7C4, 0x1D7CB), (0x1D7CE, 0x1D7FF),
            (0x1DA00, 0x1DA36), (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84),
            (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF), (0x1DF00, 0x1DF1E), (0x1DF25, 0x1DF2A),
            (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
            (0x1E026, 0x1E02A), (0x1E030, 0x1E06D), (0x1E08F, 0x1E08F), (0x1E100, 0x1E12C),
            (0x1E130, 0x1E13D), (0x1E140, 0x1E149), (0x1E14E, 0x1E14E), (0x1E290, 0x1E2AE),
            (0x1E2C0, 0x1E2F9), (0x1E4D0, 0x1E4F9), (0x1E5D0, 0x1E5FA), (0x1E6C0, 0x1E6DE),
            (0x1E6E0, 0x1E6F5), (0x1E6FE, 0x1E6FF), (0x1E7E0, 0x1E7E6), (0x1E7E8, 0x1E7EB),
            (0x1E7ED, 0x1E7EE), (0x1E7F0, 0x1E7FE), (0x1E800, 0x1E8C4), (0x1E8D0, 0x1E8D6),
            (0x1E900, 0x1E94B), (0x1E950, 0x1E959), (0x1EE00, 0x1EE03), (0x1EE05, 0x1EE1F),
            (0x1EE21, 0x1EE22), (0x1EE24, 0x1EE24), (0x1EE27, 0x1EE27), (0x1EE29, 0x1EE32),
            (0x1EE34, 0x1EE37), (0x1EE39, 0x1EE39), (0x1EE3B, 0x1EE3B), (0x1EE42, 0x1EE42),
            (0x1EE47, 0x1EE47), (0x1EE49, 0x1EE49), (0x1EE4B, 0x1EE4B), (0x1EE4D, 0x1EE4F),
            (0x1EE51, 0x1EE52), (0x1EE54, 0x1EE54), (0x1EE57, 0x1EE57), (0x1EE59, 0x1EE59),
            (0x1EE5B, 0x1EE5B), (0x1EE5D, 0x1EE5D), (0x1EE5F, 0x1EE5F), (0x1EE61, 0x1EE62),
            (0x1EE64, 0x1EE64), (0x1EE67, 0x1EE6A), (0x1EE6C, 0x1EE72), (0x1EE74, 0x1EE77),
            (0x1EE79, 0x1EE7C), (0x1EE7E, 0x1EE7E), (0x1EE80, 0x1EE89), (0x1EE8B, 0x1EE9B),
            (0x1EEA1, 0x1EEA3), (0x1EEA5, 0x1EEA9), (0x1EEAB, 0x1EEBB), (0x1F130, 0x1F149),
            (0x1F150, 0x1F169), (0x1F170, 0x1F189), (0x1F1E6, 0x1F1FF), (0x1F3FB, 0x1F3FF),
            (0x1FBF0, 0x1FBF9), (0xE0001, 0xE0001), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
        ])),
    ),
    (
        "^regionalindicator",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x1F1E5), (0x1F200, 0x10FFFF),
        ])),
    ),
    (
        "^singlequote",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0026), (0x0028, 0x10FFFF),
        ])),
    ),
    (
        "^wsegspace",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x001F), (0x0021, 0x167F), (0x1681, 0x1FFF), (0x2007, 0x2007),
            (0x200B, 0x205E), (0x2060, 0x2FFF), (0x3001, 0x10FFFF),
        ])),
    ),
    (
        "^zwj",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x200C), (0x200E, 0x10FFFF),
        ])),
    ),
    (
        "aletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x0041, 0x005A), (0x0061, 0x007A), (0x00AA, 0x00AA), (0x00B5, 0x00B5),
            (0x00B8, 0x00B8), (0x00BA, 0x00BA), (0x00C0, 0x00D6), (0x00D8, 0x00F6),
            (0x00F8, 0x02D7), (0x02DE, 0x02FF), (0x0370, 0x0374), (0x0376, 0x0377),
            (0x037A, 0x037D), (0x037F, 0x037F), (0x0386, 0x0386), (0x0388, 0x038A),
            (0x038C, 0x038C), (0x038E, 0x03A1), (0x03A3, 0x03F5), (0x03F7, 0x0481),
            (0x048A, 0x052F), (0x0531, 0x0556), (0x0559, 0x055C), (0x055E, 0x055E),
            (0x0560, 0x0588), (0x058A, 0x058A), (0x05F3, 0x05F3), (0x0620, 0x064A),
            (0x066E, 0x066F), (0x0671, 0x06D3), (0x06D5, 0x06D5), (0x06E5, 0x06E6),
            (0x06EE, 0x06EF), (0x06FA, 0x06FC), (0x06FF, 0x06FF), (0x070F, 0x0710),
            (0x0712, 0x072F), (0x074D, 0x07A5), (0x07B1, 0x07B1), (0x07CA, 0x07EA),
            (0x07F4, 0x07F5), (0x07FA, 0x07FA), (0x0800, 0x0815), (0x081A, 0x081A),
            (0x0824, 0x0824), (0x0828, 0x0828), (0x0840, 0x0858), (0x0860, 0x086A),
            (0x0870, 0x0887), (0x0889, 0x088F), (0x08A0, 0x08C9), (0x0904, 0x0939),
            (0x093D, 0x093D), (0x0950, 0x0950), (0x0958, 0x0961), (0x0971, 0x0980),
            (0x0985, 0x098C), (0x098F, 0x0990), (0x0993, 0x09A8), (0x09AA, 0x09B0),
            (0x09B2, 0x09B2), (0x09B6, 0x09B9), (0x09BD, 0x09BD), (0x09CE, 0x09CE),
            (0x09DC, 0x09DD), (0x09DF, 0x09E1), (0x09F0, 0x09F1), (0x09FC, 0x09FC),
            (0x0A05, 0x0A0A), (0x0A0F, 0x0A10), (0x0A13, 0x0A28), (0x0A2A, 0x0A30),
            (0x0A32, 0x0A33), (0x0A35, 0x0A36), (0x0A38, 0x0A39), (0x0A59, 0x0A5C),
            (0x0A5E, 0x0A5E), (0x0A72, 0x0A74), (0x0A85, 0x0A8D), (0x0A8F, 0x0A91),
            (0x0A93, 0x0AA8), (0x0AAA, 0x0AB0), (0x0AB2, 0x0AB3), (0x0AB5, 0x0AB9),
            (0x0ABD, 0x0ABD), (0x0AD0, 0x0AD0), (0x0AE0, 0x0AE1), (0x0AF9, 0x0AF9),
            (0x0B05, 0x0B0C), (0x0B0F, 0x0B10), (0x0B13, 0x0B28), (0x0B2A, 0x0B30),
            (0x0B32, 0x0B33), (0x0B35, 0x0B39), (0x0B3D, 0x0B3D), (0x0B5C, 0x0B5D),
            (0x0B5F, 0x0B61), (0x0B71, 0x0B71), (0x0B83, 0x0B83), (0x0B85, 0x0B8A),
            (0x0B8E, 0x0B90), (0x0B92, 0x0B95), (0x0B99, 0x0B9A), (0x0B9C, 0x0B9C),
            (0x0B9E, 0x0B9F), (0x0BA3, 0x0BA4), (0x0BA8, 0x0BAA), (0x0BAE, 0x0BB9),
            (0x0BD0, 0x0BD0), (0x0C05, 0x0C0C), (0x0C0E, 0x0C10), (0x0C12, 0x0C28),
            (0x0C2A, 0x0C39), (0x0C3D, 0x0C3D), (0x0C58, 0x0C5A), (0x0C5C, 0x0C5D),
            (0x0C60, 0x0C61), (0x0C80, 0x0C80), (0x0C85, 0x0C8C), (0x0C8E, 0x0C90),
            (0x0C92, 0x0CA8), (0x0CAA, 0x0CB3), (0x0CB5, 0x0CB9), (0x0CBD, 0x0CBD),
            (0x0CDC, 0x0CDE), (0x0CE0, 0x0CE1), (0x0CF1, 0x0CF2), (0x0D04, 0x0D0C),
            (0x0D0E, 0x0D10), (0x0D12, 0x0D3A), (0x0D3D, 0x0D3D), (0x0D4E, 0x0D4E),
            (0x0D54, 0x0D56), (0x0D5F, 0x0D61), (0x0D7A, 0x0D7F), (0x0D85, 0x0D96),
            (0x0D9A, 0x0DB1), (0x0DB3, 0x0DBB), (0x0DBD, 0x0DBD), (0x0DC0, 0x0DC6),
            (0x0F00, 0x0F00), (0x0F40, 0x0F47), (0x0F49, 0x0F6C), (0x0F88, 0x0F8C),
            (0x10A0, 0x10C5), (0x10C7, 0x10C7), (0x10CD, 0x10CD), (0x10D0, 0x10FA),
            (0x10FC, 0x1248), (0x124A, 0x124D), (0x1250, 0x1256), (0x1258, 0x1258),
            (0x125A, 0x125D), (0x1260, 0x1288), (0x128A, 0x128D), (0x1290, 0x12B0),
            (0x12B2, 0x12B5), (0x12B8, 0x12BE), (0x12C0, 0x12C0), (0x12C2, 0x12C5),
            (0x12C8, 0x12D6), (0x12D8, 0x1310), (0x1312, 0x1315), (0x1318, 0x135A),
            (0x1380, 0x138F), (0x13A0, 0x13F5), (0x13F8, 0x13FD), (0x1401, 0x166C),
            (0x166F, 0x167F), (0x1681, 0x169A), (0x16A0, 0x16EA), (0x16EE, 0x16F8),
            (0x1700, 0x1711), (0x171F, 0x1731), (0x1740, 0x1751), (0x1760, 0x176C),
            (0x176E, 0x1770), (0x1820, 0x1878), (0x1880, 0x1884), (0x1887, 0x18A8),
            (0x18AA, 0x18AA), (0x18B0, 0x18F5), (0x1900, 0x191E), (0x1A00, 0x1A16),
            (0x1B05, 0x1B33), (0x1B45, 0x1B4C), (0x1B83, 0x1BA0), (0x1BAE, 0x1BAF),
            (0x1BBA, 0x1BE5), (0x1C00, 0x1C23), (0x1C4D, 0x1C4F), (0x1C5A, 0x1C7D),
            (0x1C80, 0x1C8A), (0x1C90, 0x1CBA), (0x1CBD, 0x1CBF), (0x1CE9, 0x1CEC),
            (0x1CEE, 0x1CF3), (0x1CF5, 0x1CF6), (0x1CFA, 0x1CFA), (0x1D00, 0x1DBF),
            (0x1E00, 0x1F15), (0x1F18, 0x1F1D), (0x1F20, 0x1F45), (0x1F48, 0x1F4D),
            (0x1F50, 0x1F57), (0x1F59, 0x1F59), (0x1F5B, 0x1F5B), (0x1F5D, 0x1F5D),
            (0x1F5F, 0x1F7D), (0x1F80, 0x1FB4), (0x1FB6, 0x1FBC), (0x1FBE, 0x1FBE),
            (0x1FC2, 0x1FC4), (0x1FC6, 0x1FCC), (0x1FD0, 0x1FD3), (0x1FD6, 0x1FDB),
            (0x1FE0, 0x1FEC), (0x1FF2, 0x1FF4), (0x1FF6, 0x1FFC), (0x2071, 0x2071),
            (0x207F, 0x207F), (0x2090, 0x209C), (0x2102, 0x2102), (0x2107, 0x2107),
            (0x210A, 0x2113), (0x2115, 0x2115), (0x2119, 0x211D), (0x2124, 0x2124),
            (0x2126, 0x2126), (0x2128, 0x2128), (0x212A, 0x212D), (0x212F, 0x2139),
            (0x213C, 0x213F), (0x2145, 0x2149), (0x214E, 0x214E), (0x2160, 0x2188),
            (0x24B6, 0x24E9), (0x2C00, 0x2CE4), (0x2CEB, 0x2CEE), (0x2CF2, 0x2CF3),
            (0x2D00, 0x2D25), (0x2D27, 0x2D27), (0x2D2D, 0x2D2D), (0x2D30, 0x2D67),
            (0x2D6F, 0x2D6F), (0x2D80, 0x2D96), (0x2DA0, 0x2DA6), (0x2DA8, 0x2DAE),
            (0x2DB0, 0x2DB6), (0x2DB8, 0x2DBE), (0x2DC0, 0x2DC6), (0x2DC8, 0x2DCE),
            (0x2DD0, 0x2DD6), (0x2DD8, 0x2DDE), (0x2E2F, 0x2E2F), (0x3005, 0x3005),
            (0x303B, 0x303C), (0x3105, 0x312F), (0x3131, 0x318E), (0x31A0, 0x31BF),
            (0xA000, 0xA48C), (0xA4D0, 0xA4FD), (0xA500, 0xA60C), (0xA610, 0xA61F),
            (0xA62A, 0xA62B), (0xA640, 0xA66E), (0xA67F, 0xA69D), (0xA6A0, 0xA6EF),
            (0xA708, 0xA7DC), (0xA7F1, 0xA801), (0xA803, 0xA805), (0xA807, 0xA80A),
            (0xA80C, 0xA822), (0xA840, 0xA873), (0xA882, 0xA8B3), (0xA8F2, 0xA8F7),
            (0xA8FB, 0xA8FB), (0xA8FD, 0xA8FE), (0xA90A, 0xA925), (0xA930, 0xA946),
            (0xA960, 0xA97C), (0xA984, 0xA9B2), (0xA9CF, 0xA9CF), (0xAA00, 0xAA28),
            (0xAA40, 0xAA42), (0xAA44, 0xAA4B), (0xAAE0, 0xAAEA), (0xAAF2, 0xAAF4),
            (0xAB01, 0xAB06), (0xAB09, 0xAB0E), (0xAB11, 0xAB16), (0xAB20, 0xAB26),
            (0xAB28, 0xAB2E), (0xAB30, 0xAB69), (0xAB70, 0xABE2), (0xAC00, 0xD7A3),
            (0xD7B0, 0xD7C6), (0xD7CB, 0xD7FB), (0xFB00, 0xFB06), (0xFB13, 0xFB17),
            (0xFB50, 0xFBB1), (0xFBD3, 0xFD3D), (0xFD50, 0xFD8F), (0xFD92, 0xFDC7),
            (0xFDF0, 0xFDFB), (0xFE70, 0xFE74), (0xFE76, 0xFEFC), (0xFF21, 0xFF3A),
            (0xFF41, 0xFF5A), (0xFFA0, 0xFFBE), (0xFFC2, 0xFFC7), (0xFFCA, 0xFFCF),
            (0xFFD2, 0xFFD7), (0xFFDA, 0xFFDC), (0x10000, 0x1000B), (0x1000D, 0x10026),
            (0x10028, 0x1003A), (0x1003C, 0x1003D), (0x1003F, 0x1004D), (0x10050, 0x1005D),
            (0x10080, 0x100FA), (0x10140, 0x10174), (0x10280, 0x1029C), (0x102A0, 0x102D0),
            (0x10300, 0x1031F), (0x1032D, 0x1034A), (0x10350, 0x10375), (0x10380, 0x1039D),
            (0x103A0, 0x103C3), (0x103C8, 0x103CF), (0x103D1, 0x103D5), (0x10400, 0x1049D),
            (0x104B0, 0x104D3), (0x104D8, 0x104FB), (0x10500, 0x10527), (0x10530, 0x10563),
            (0x10570, 0x1057A), (0x1057C, 0x1058A), (0x1058C, 0x10592), (0x10594, 0x10595),
            (0x10597, 0x105A1), (0x105A3, 0x105B1), (0x105B3, 0x105B9), (0x105BB, 0x105BC),
            (0x105C0, 0x105F3), (0x10600, 0x10736), (0x10740, 0x10755), (0x10760, 0x10767),
            (0x10780, 0x10785), (0x10787, 0x107B0), (0x107B2, 0x107BA), (0x10800, 0x10805),
            (0x10808, 0x10808), (0x1080A, 0x10835), (0x10837, 0x10838), (0x1083C, 0x1083C),
            (0x1083F, 0x10855), (0x10860, 0x10876), (0x10880, 0x1089E), (0x108E0, 0x108F2),
            (0x108F4, 0x108F5), (0x10900, 0x10915), (0x10920, 0x10939), (0x10940, 0x10959),
            (0x10980, 0x109B7), (0x109BE, 0x109BF), (0x10A00, 0x10A00), (0x10A10, 0x10A13),
            (0x10A15, 0x10A17), (0x10A19, 0x10A35), (0x10A60, 0x10A7C), (0x10A80, 0x10A9C),
            (0x10AC0, 0x10AC7), (0x10AC9, 0x10AE4), (0x10B00, 0x10B35), (0x10B40, 0x10B55),
            (0x10B60, 0x10B72), (0x10B80, 0x10B91), (0x10C00, 0x10C48), (0x10C80, 0x10CB2),
            (0x10CC0, 0x10CF2), (0x10D00, 0x10D23), (0x10D4A, 0x10D65), (0x10D6F, 0x10D85),
            (0x10E80, 0x10EA9), (0x10EB0, 0x10EB1), (0x10EC2, 0x10EC7), (0x10F00, 0x10F1C),
            (0x10F27, 0x10F27), (0x10F30, 0x10F45), (0x10F70, 0x10F81), (0x10FB0, 0x10FC4),
            (0x10FE0, 0x10FF6), (0x11003, 0x11037), (0x11071, 0x11072), (0x11075, 0x11075),
            (0x11083, 0x110AF), (0x110D0, 0x110E8), (0x11103, 0x11126), (0x11144, 0x11144),
            (0x11147, 0x11147), (0x11150, 0x11172), (0x11176, 0x11176), (0x11183, 0x111B2),
            (0x111C1, 0x111C4), (0x111DA, 0x111DA), (0x111DC, 0x111DC), (0x11200, 0x11211),
            (0x11213, 0x1122B), (0x1123F, 0x11240), (0x11280, 0x11286), (0x11288, 0x11288),
            (0x1128A, 0x1128D), (0x1128F, 0x1129D), (0x1129F, 0x112A8), (0x112B0, 0x112DE),
            (0x11305, 0x1130C), (0x1130F, 0x11310), (0x11313, 0x11328), (0x1132A, 0x11330),
            (0x11332, 0x11333), (0x11335, 0x11339), (0x1133D, 0x1133D), (0x11350, 0x11350),
            (0x1135D, 0x11361), (0x11380, 0x11389), (0x1138B, 0x1138B), (0x1138E, 0x1138E),
            (0x11390, 0x113B5), (0x113B7, 0x113B7), (0x113D1, 0x113D1), (0x113D3, 0x113D3),
            (0x11400, 0x11434), (0x11447, 0x1144A), (0x1145F, 0x11461), (0x11480, 0x114AF),
            (0x114C4, 0x114C5), (0x114C7, 0x114C7), (0x11580, 0x115AE), (0x115D8, 0x115DB),
            (0x11600, 0x1162F), (0x11644, 0x11644), (0x11680, 0x116AA), (0x116B8, 0x116B8),
            (0x11800, 0x1182B), (0x118A0, 0x118DF), (0x118FF, 0x11906), (0x11909, 0x11909),
            (0x1190C, 0x11913), (0x11915, 0x11916), (0x11918, 0x1192F), (0x1193F, 0x1193F),
            (0x11941, 0x11941), (0x119A0, 0x119A7), (0x119AA, 0x119D0), (0x119E1, 0x119E1),
            (0x119E3, 0x119E3), (0x11A00, 0x11A00), (0x11A0B, 0x11A32), (0x11A3A, 0x11A3A),
            (0x11A50, 0x11A50), (0x11A5C, 0x11A89), (0x11A9D, 0x11A9D), (0x11AB0, 0x11AF8),
            (0x11BC0, 0x11BE0), (0x11C00, 0x11C08), (0x11C0A, 0x11C2E), (0x11C40, 0x11C40),
            (0x11C72, 0x11C8F), (0x11D00, 0x11D06), (0x11D08, 0x11D09), (0x11D0B, 0x11D30),
            (0x11D46, 0x11D46), (0x11D60, 0x11D65), (0x11D67, 0x11D68), (0x11D6A, 0x11D89),
            (0x11D98, 0x11D98), (0x11DB0, 0x11DDB), (0x11EE0, 0x11EF2), (0x11F02, 0x11F02),
            (0x11F04, 0x11F10), (0x11F12, 0x11F33), (0x11FB0, 0x11FB0), (0x12000, 0x12399),
            (0x12400, 0x1246E), (0x12480, 0x12543), (0x12F90, 0x12FF0), (0x13000, 0x1342F),
            (0x13441, 0x13446), (0x13460, 0x143FA), (0x14400, 0x14646), (0x16100, 0x1611D),
            (0x16800, 0x16A38), (0x16A40, 0x16A5E), (0x16A70, 0x16ABE), (0x16AD0, 0x16AED),
            (0x16B00, 0x16B2F), (0x16B40, 0x16B43), (0x16B63, 0x16B77), (0x16B7D, 0x16B8F),
            (0x16D40, 0x16D6C), (0x16E40, 0x16E7F), (0x16EA0, 0x16EB8), (0x16EBB, 0x16ED3),
            (0x16F00, 0x16F4A), (0x16F50, 0x16F50), (0x16F93, 0x16F9F), (0x16FE0, 0x16FE1),
            (0x16FE3, 0x16FE3), (0x1BC00, 0x1BC6A), (0x1BC70, 0x1BC7C), (0x1BC80, 0x1BC88),
            (0x1BC90, 0x1BC99), (0x1D400, 0x1D454), (0x1D456, 0x1D49C), (0x1D49E, 0x1D49F),
            (0x1D4A2, 0x1D4A2), (0x1D4A5, 0x1D4A6), (0x1D4A9, 0x1D4AC), (0x1D4AE, 0x1D4B9),
            (0x1D4BB, 0x1D4BB), (0x1D4BD, 0x1D4C3), (0x1D4C5, 0x1D505), (0x1D507, 0x1D50A),
            (0x1D50D, 0x1D514), (0x1D516, 0x1D51C), (0x1D51E, 0x1D539), (0x1D53B, 0x1D53E),
            (0x1D540, 0x1D544), (0x1D546, 0x1D546), (0x1D54A, 0x1D550), (0x1D552, 0x1D6A5),
            (0x1D6A8, 0x1D6C0), (0x1D6C2, 0x1D6DA), (0x1D6DC, 0x1D6FA), (0x1D6FC, 0x1D714),
            (0x1D716, 0x1D734), (0x1D736, 0x1D74E), (0x1D750, 0x1D76E), (0x1D770, 0x1D788),
            (0x1D78A, 0x1D7A8), (0x1D7AA, 0x1D7C2), (0x1D7C4, 0x1D7CB), (0x1DF00, 0x1DF1E),
            (0x1DF25, 0x1DF2A), (0x1E030, 0x1E06D), (0x1E100, 0x1E12C), (0x1E137, 0x1E13D),
            (0x1E14E, 0x1E14E), (0x1E290, 0x1E2AD), (0x1E2C0, 0x1E2EB), (0x1E4D0, 0x1E4EB),
            (0x1E5D0, 0x1E5ED), (0x1E5F0, 0x1E5F0), (0x1E6C0, 0x1E6DE), (0x1E6E0, 0x1E6E2),
            (0x1E6E4, 0x1E6E5), (0x1E6E7, 0x1E6ED), (0x1E6F0, 0x1E6F4), (0x1E6FE, 0x1E6FF),
            (0x1E7E0, 0x1E7E6), (0x1E7E8, 0x1E7EB), (0x1E7ED, 0x1E7EE), (0x1E7F0, 0x1E7FE),
            (0x1E800, 0x1E8C4), (0x1E900, 0x1E943), (0x1E94B, 0x1E94B), (0x1EE00, 0x1EE03),
            (0x1EE05, 0x1EE1F), (0x1EE21, 0x1EE22), (0x1EE24, 0x1EE24), (0x1EE27, 0x1EE27),
            (0x1EE29, 0x1EE32), (0x1EE34, 0x1EE37), (0x1EE39, 0x1EE39), (0x1EE3B, 0x1EE3B),
            (0x1EE42, 0x1EE42), (0x1EE47, 0x1EE47), (0x1EE49, 0x1EE49), (0x1EE4B, 0x1EE4B),
            (0x1EE4D, 0x1EE4F), (0x1EE51, 0x1EE52), (0x1EE54, 0x1EE54), (0x1EE57, 0x1EE57),
            (0x1EE59, 0x1EE59), (0x1EE5B, 0x1EE5B), (0x1EE5D, 0x1EE5D), (0x1EE5F, 0x1EE5F),
            (0x1EE61, 0x1EE62), (0x1EE64, 0x1EE64), (0x1EE67, 0x1EE6A), (0x1EE6C, 0x1EE72),
            (0x1EE74, 0x1EE77), (0x1EE79, 0x1EE7C), (0x1EE7E, 0x1EE7E), (0x1EE80, 0x1EE89),
            (0x1EE8B, 0x1EE9B), (0x1EEA1, 0x1EEA3), (0x1EEA5, 0x1EEA9), (0x1EEAB, 0x1EEBB),
            (0x1F130, 0x1F149), (0x1F150, 0x1F169), (0x1F170, 0x1F189),
        ])),
    ),
    (
        "cr",
        DatasetEntry::Class(CharClass::new(&[
            (0x000D, 0x000D),
        ])),
    ),
    (
        "doublequote",
        DatasetEntry::Class(CharClass::new(&[
            (0x0022, 0x0022),
        ])),
    ),
    (
        "ebase",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "ebasegaz",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "emodifier",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "extend",
        DatasetEntry::Class(CharClass::new(&[
            (0x0300, 0x036F), (0x0483, 0x0489), (0x0591, 0x05BD), (0x05BF, 0x05BF),
            (0x05C1, 0x05C2), (0x05C4, 0x05C5), (0x05C7, 0x05C7), (0x0610, 0x061A),
            (0x064B, 0x065F), (0x0670, 0x0670), (0x06D6, 0x06DC), (0x06DF, 0x06E4),
            (0x06E7, 0x06E8), (0x06EA, 0x06ED), (0x0711, 0x0711), (0x0730, 0x074A),
            (0x07A6, 0x07B0), (0x07EB, 0x07F3), (0x07FD, 0x07FD), (0x0816, 0x0819),
            (0x081B, 0x0823), (0x0825, 0x0827), (0x0829, 0x082D), (0x0859, 0x085B),
            (0x0897, 0x089F), (0x08CA, 0x08E1), (0x08E3, 0x0903), (0x093A, 0x093C),
            (0x093E, 0x094F), (0x0951, 0x0957), (0x0962, 0x0963), (0x0981, 0x0983),
            (0x09BC, 0x09BC), (0x09BE, 0x09C4), (0x09C7, 0x09C8), (0x09CB, 0x09CD),
            (0x09D7, 0x09D7), (0x09E2, 0x09E3), (0x09FE, 0x09FE), (0x0A01, 0x0A03),
            (0x0A3C, 0x0A3C), (0x0A3E, 0x0A42), (0x0A47, 0x0A48), (0x0A4B, 0x0A4D),
            (0x0A51, 0x0A51), (0x0A70, 0x0A71), (0x0A75, 0x0A75), (0x0A81, 0x0A83),
            (0x0ABC, 0x0ABC), (0x0ABE, 0x0AC5), (0x0AC7, 0x0AC9), (0x0ACB, 0x0ACD),
            (0x0AE2, 0x0AE3), (0x0AFA, 0x0AFF), (0x0B01, 0x0B03), (0x0B3C, 0x0B3C),
            (0x0B3E, 0x0B44), (0x0B47, 0x0B48), (0x0B4B, 0x0B4D), (0x0B55, 0x0B57),
            (0x0B62, 0x0B63), (0x0B82, 0x0B82), (0x0BBE, 0x0BC2), (0x0BC6, 0x0BC8),
            (0x0BCA, 0x0BCD), (0x0BD7, 0x0BD7), (0x0C00, 0x0C04), (0x0C3C, 0x0C3C),
            (0x0C3E, 0x0C44), (0x0C46, 0x0C48), (0x0C4A, 0x0C4D), (0x0C55, 0x0C56),
            (0x0C62, 0x0C63), (0x0C81, 0x0C83), (0x0CBC, 0x0CBC), (0x0CBE, 0x0CC4),
            (0x0CC6, 0x0CC8), (0x0CCA, 0x0CCD), (0x0CD5, 0x0CD6), (0x0CE2, 0x0CE3),
            (0x0CF3, 0x0CF3), (0x0D00, 0x0D03), (0x0D3B, 0x0D3C), (0x0D3E, 0x0D44),
            (0x0D46, 0x0D48), (0x0D4A, 0x0D4D), (0x0D57, 0x0D57), (0x0D62, 0x0D63),
            (0x0D81, 0x0D83), (0x0DCA, 0x0DCA), (0x0DCF, 0x0DD4), (0x0DD6, 0x0DD6),
            (0x0DD8, 0x0DDF), (0x0DF2, 0x0DF3), (0x0E31, 0x0E31), (0x0E34, 0x0E3A),
            (0x0E47, 0x0E4E), (0x0EB1, 0x0EB1), (0x0EB4, 0x0EBC), (0x0EC8, 0x0ECE),
            (0x0F18, 0x0F19), (0x0F35, 0x0F35), (0x0F37, 0x0F37), (0x0F39, 0x0F39),
            (0x0F3E, 0x0F3F), (0x0F71, 0x0F84), (0x0F86, 0x0F87), (0x0F8D, 0x0F97),
            (0x0F99, 0x0FBC), (0x0FC6, 0x0FC6), (0x102B, 0x103E), (0x1056, 0x1059),
            (0x105E, 0x1060), (0x1062, 0x1064), (0x1067, 0x106D), (0x1071, 0x1074),
            (0x1082, 0x108D), (0x108F, 0x108F), (0x109A, 0x109D), (0x135D, 0x135F),
            (0x1712, 0x1715), (0x1732, 0x1734), (0x1752, 0x1753), (0x1772, 0x1773),
            (0x17B4, 0x17D3), (0x17DD, 0x17DD), (0x180B, 0x180D), (0x180F, 0x180F),
            (0x1885, 0x1886), (0x18A9, 0x18A9), (0x1920, 0x192B), (0x1930, 0x193B),
            (0x1A17, 0x1A1B), (0x1A55, 0x1A5E), (0x1A60, 0x1A7C), (0x1A7F, 0x1A7F),
            (0x1AB0, 0x1ADD), (0x1AE0, 0x1AEB), (0x1B00, 0x1B04), (0x1B34, 0x1B44),
            (0x1B6B, 0x1B73), (0x1B80, 0x1B82), (0x1BA1, 0x1BAD), (0x1BE6, 0x1BF3),
            (0x1C24, 0x1C37), (0x1CD0, 0x1CD2), (0x1CD4, 0x1CE8), (0x1CED, 0x1CED),
            (0x1CF4, 0x1CF4), (0x1CF7, 0x1CF9), (0x1DC0, 0x1DFF), (0x200C, 0x200C),
            (0x20D0, 0x20F0), (0x2CEF, 0x2CF1), (0x2D7F, 0x2D7F), (0x2DE0, 0x2DFF),
            (0x302A, 0x302F), (0x3099, 0x309A), (0xA66F, 0xA672), (0xA674, 0xA67D),
            (0xA69E, 0xA69F), (0xA6F0, 0xA6F1), (0xA802, 0xA802), (0xA806, 0xA806),
            (0xA80B, 0xA80B), (0xA823, 0xA827), (0xA82C, 0xA82C), (0xA880, 0xA881),
            (0xA8B4, 0xA8C5), (0xA8E0, 0xA8F1), (0xA8FF, 0xA8FF), (0xA926, 0xA92D),
            (0xA947, 0xA953), (0xA980, 0xA983), (0xA9B3, 0xA9C0), (0xA9E5, 0xA9E5),
            (0xAA29, 0xAA36), (0xAA43, 0xAA43), (0xAA4C, 0xAA4D), (0xAA7B, 0xAA7D),
            (0xAAB0, 0xAAB0), (0xAAB2, 0xAAB4), (0xAAB7, 0xAAB8), (0xAABE, 0xAABF),
            (0xAAC1, 0xAAC1), (0xAAEB, 0xAAEF), (0xAAF5, 0xAAF6), (0xABE3, 0xABEA),
            (0xABEC, 0xABED), (0xFB1E, 0xFB1E), (0xFE00, 0xFE0F), (0xFE20, 0xFE2F),
            (0xFF9E, 0xFF9F), (0x101FD, 0x101FD), (0x102E0, 0x102E0), (0x10376, 0x1037A),
            (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
            (0x10A3F, 0x10A3F), (0x10AE5, 0x10AE6), (0x10D24, 0x10D27), (0x10D69, 0x10D6D),
            (0x10EAB, 0x10EAC), (0x10EFA, 0x10EFF), (0x10F46, 0x10F50), (0x10F82, 0x10F85),
            (0x11000, 0x11002), (0x11038, 0x11046), (0x11070, 0x11070), (0x11073, 0x11074),
            (0x1107F, 0x11082), (0x110B0, 0x110BA), (0x110C2, 0x110C2), (0x11100, 0x11102),
            (0x11127, 0x11134), (0x11145, 0x11146), (0x11173, 0x11173), (0x11180, 0x11182),
            (0x111B3, 0x111C0), (0x111C9, 0x111CC), (0x111CE, 0x111CF), (0x1122C, 0x11237),
            (0x1123E, 0x1123E), (0x11241, 0x11241), (0x112DF, 0x112EA), (0x11300, 0x11303),
            (0x1133B, 0x1133C), (0x1133E, 0x11344), (0x11347, 0x11348), (0x1134B, 0x1134D),
            (0x11357, 0x11357), (0x11362, 0x11363), (0x11366, 0x1136C), (0x11370, 0x11374),
            (0x113B8, 0x113C0), (0x113C2, 0x113C2), (0x113C5, 0x113C5), (0x113C7, 0x113CA),
            (0x113CC, 0x113D0), (0x113D2, 0x113D2), (0x113E1, 0x113E2), (0x11435, 0x11446),
            (0x1145E, 0x1145E), (0x114B0, 0x114C3), (0x115AF, 0x115B5), (0x115B8, 0x115C0),
            (0x115DC, 0x115DD), (0x11630, 0x11640), (0x116AB, 0x116B7), (0x1171D, 0x1172B),
            (0x1182C, 0x1183A), (0x11930, 0x11935), (0x11937, 0x11938), (0x1193B, 0x1193E),
            (0x11940, 0x11940), (0x11942, 0x11943), (0x119D1, 0x119D7), (0x119DA, 0x119E0),
            (0x119E4, 0x119E4), (0x11A01, 0x11A0A), (0x11A33, 0x11A39), (0x11A3B, 0x11A3E),
            (0x11A47, 0x11A47), (0x11A51, 0x11A5B), (0x11A8A, 0x11A99), (0x11B60, 0x11B67),
            (0x11C2F, 0x11C36), (0x11C38, 0x11C3F), (0x11C92, 0x11CA7), (0x11CA9, 0x11CB6),
            (0x11D31, 0x11D36), (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D), (0x11D3F, 0x11D45),
            (0x11D47, 0x11D47), (0x11D8A, 0x11D8E), (0x11D90, 0x11D91), (0x11D93, 0x11D97),
            (0x11EF3, 0x11EF6), (0x11F00, 0x11F01), (0x11F03, 0x11F03), (0x11F34, 0x11F3A),
            (0x11F3E, 0x11F42), (0x11F5A, 0x11F5A), (0x13440, 0x13440), (0x13447, 0x13455),
            (0x1611E, 0x1612F), (0x16AF0, 0x16AF4), (0x16B30, 0x16B36), (0x16F4F, 0x16F4F),
            (0x16F51, 0x16F87), (0x16F8F, 0x16F92), (0x16FE4, 0x16FE4), (0x16FF0, 0x16FF1),
            (0x1BC9D, 0x1BC9E), (0x1CF00, 0x1CF2D), (0x1CF30, 0x1CF46), (0x1D165, 0x1D169),
            (0x1D16D, 0x1D172), (0x1D17B, 0x1D182), (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD),
            (0x1D242, 0x1D244), (0x1DA00, 0x1DA36), (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75),
            (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF), (0x1E000, 0x1E006),
            (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024), (0x1E026, 0x1E02A),
            (0x1E08F, 0x1E08F), (0x1E130, 0x1E136), (0x1E2AE, 0x1E2AE), (0x1E2EC, 0x1E2EF),
            (0x1E4EC, 0x1E4EF), (0x1E5EE, 0x1E5EF), (0x1E6E3, 0x1E6E3), (0x1E6E6, 0x1E6E6),
            (0x1E6EE, 0x1E6EF), (0x1E6F5, 0x1E6F5), (0x1E8D0, 0x1E8D6), (0x1E944, 0x1E94A),
            (0x1F3FB, 0x1F3FF), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
        ])),
    ),
    (
        "extendnumlet",
        DatasetEntry::Class(CharClass::new(&[
            (0x005F, 0x005F), (0x202F, 0x202F), (0x203F, 0x2040), (0x2054, 0x2054),
            (0xFE33, 0xFE34), (0xFE4D, 0xFE4F), (0xFF3F, 0xFF3F),
        ])),
    ),
    (
        "format",
        DatasetEntry::Class(CharClass::new(&[
            (0x00AD, 0x00AD), (0x061C, 0x061C), (0x180E, 0x180E), (0x200E, 0x200F),
            (0x202A, 0x202E), (0x2060, 0x2064), (0x2066, 0x206F), (0xFEFF, 0xFEFF),
            (0xFFF9, 0xFFFB), (0x13430, 0x1343F), (0x1BCA0, 0x1BCA3), (0x1D173, 0x1D17A),
            (0xE0001, 0xE0001),
        ])),
    ),
    (
        "glueafterzwj",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "hebrewletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x05D0, 0x05EA), (0x05EF, 0x05F2), (0xFB1D, 0xFB1D), (0xFB1F, 0xFB28),
            (0xFB2A, 0xFB36), (0xFB38, 0xFB3C), (0xFB3E, 0xFB3E), (0xFB40, 0xFB41),
            (0xFB43, 0xFB44), (0xFB46, 0xFB4F),
        ])),
    ),
    (
        "katakana",
        DatasetEntry::Class(CharClass::new(&[
            (0x3031, 0x3035), (0x309B, 0x309C), (0x30A0, 0x30FA), (0x30FC, 0x30FF),
            (0x31F0, 0x31FF), (0x32D0, 0x32FE), (0x3300, 0x3357), (0xFF66, 0xFF9D),
            (0x1AFF0, 0x1AFF3), (0x1AFF5, 0x1AFFB), (0x1AFFD, 0x1AFFE), (0x1B000, 0x1B000),
            (0x1B120, 0x1B122), (0x1B155, 0x1B155), (0x1B164, 0x1B167),
        ])),
    ),
    (
        "lf",
        DatasetEntry::Class(CharClass::new(&[
            (0x000A, 0x000A),
        ])),
    ),
    (
        "midletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x003A, 0x003A), (0x00B7, 0x00B7), (0x0387, 0x0387), (0x055F, 0x055F),
            (0x05F4, 0x05F4), (0x2027, 0x2027), (0xFE13, 0xFE13), (0xFE55, 0xFE55),
            (0xFF1A, 0xFF1A),
        ])),
    ),
    (
        "midnum",
        DatasetEntry::Class(CharClass::new(&[
            (0x002C, 0x002C), (0x003B, 0x003B), (0x037E, 0x037E), (0x0589, 0x0589),
            (0x060C, 0x060D), (0x066C, 0x066C), (0x07F8, 0x07F8), (0x2044, 0x2044),
            (0xFE50, 0xFE50), (0xFE54, 0xFE54), (0xFF0C, 0xFF0C), (0xFF1B, 0xFF1B),
        ])),
    ),
    (
        "midnumlet",
        DatasetEntry::Class(CharClass::new(&[
            (0x002E, 0x002E), (0x2018, 0x2019), (0x2024, 0x2024), (0xFE52, 0xFE52),
            (0xFF07, 0xFF07), (0xFF0E, 0xFF0E),
        ])),
    ),
    (
        "newline",
        DatasetEntry::Class(CharClass::new(&[
            (0x000B, 0x000C), (0x0085, 0x0085), (0x2028, 0x2029),
        ])),
    ),
    (
        "numeric",
        DatasetEntry::Class(CharClass::new(&[
            (0x0030, 0x0039), (0x0600, 0x0605), (0x0660, 0x0669), (0x066B, 0x066B),
            (0x06DD, 0x06DD), (0x06F0, 0x06F9), (0x07C0, 0x07C9), (0x0890, 0x0891),
            (0x08E2, 0x08E2), (0x0966, 0x096F), (0x09E6, 0x09EF), (0x0A66, 0x0A6F),
            (0x0AE6, 0x0AEF), (0x0B66, 0x0B6F), (0x0BE6, 0x0BEF), (0x0C66, 0x0C6F),
            (0x0CE6, 0x0CEF), (0x0D66, 0x0D6F), (0x0DE6, 0x0DEF), (0x0E50, 0x0E59),
            (0x0ED0, 0x0ED9), (0x0F20, 0x0F29), (0x1040, 0x1049), (0x1090, 0x1099),
            (0x17E0, 0x17E9), (0x1810, 0x1819), (0x1946, 0x194F), (0x19D0, 0x19DA),
            (0x1A80, 0x1A89), (0x1A90, 0x1A99), (0x1B50, 0x1B59), (0x1BB0, 0x1BB9),
            (0x1C40, 0x1C49), (0x1C50, 0x1C59), (0xA620, 0xA629), (0xA8D0, 0xA8D9),
            (0xA900, 0xA909), (0xA9D0, 0xA9D9), (0xA9F0, 0xA9F9), (0xAA50, 0xAA59),
            (0xABF0, 0xABF9), (0xFF10, 0xFF19), (0x104A0, 0x104A9), (0x10D30, 0x10D39),
            (0x10D40, 0x10D49), (0x11066, 0x1106F), (0x110BD, 0x110BD), (0x110CD, 0x110CD),
            (0x110F0, 0x110F9), (0x11136, 0x1113F), (0x111D0, 0x111D9), (0x112F0, 0x112F9),
            (0x11450, 0x11459), (0x114D0, 0x114D9), (0x11650, 0x11659), (0x116C0, 0x116C9),
            (0x116D0, 0x116E3), (0x11730, 0x11739), (0x118E0, 0x118E9), (0x11950, 0x11959),
            (0x11BF0, 0x11BF9), (0x11C50, 0x11C59), (0x11D50, 0x11D59), (0x11DA0, 0x11DA9),
            (0x11DE0, 0x11DE9), (0x11F50, 0x11F59), (0x16130, 0x16139), (0x16A60, 0x16A69),
            (0x16AC0, 0x16AC9), (0x16B50, 0x16B59), (0x16D70, 0x16D79), (0x1CCF0, 0x1CCF9),
            (0x1D7CE, 0x1D7FF), (0x1E140, 0x1E149), (0x1E2F0, 0x1E2F9), (0x1E4F0, 0x1E4F9),
            (0x1E5F1, 0x1E5FA), (0x1E950, 0x1E959), (0x1FBF0, 0x1FBF9),
        ])),
    ),
    (
        "other",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0009), (0x000E, 0x001F), (0x0021, 0x0021), (0x0023, 0x0026),
            (0x0028, 0x002B), (0x002D, 0x002D), (0x002F, 0x002F), (0x003C, 0x0040),
            (0x005B, 0x005E), (0x0060, 0x0060), (0x007B, 0x0084), (0x0086, 0x00A9),
            (0x00AB, 0x00AC), (0x00AE, 0x00B4), (0x00B6, 0x00B6), (0x00B9, 0x00B9),
            (0x00BB, 0x00BF), (0x00D7, 0x00D7), (0x00F7, 0x00F7), (0x02D8, 0x02DD),
            (0x0375, 0x0375), (0x0378, 0x0379), (0x0380, 0x0385), (0x038B, 0x038B),
            (0x038D, 0x038D), (0x03A2, 0x03A2), (0x03F6, 0x03F6), (0x0482, 0x0482),
            (0x0530, 0x0530), (0x0557, 0x0558), (0x055D, 0x055D), (0x058B, 0x0590),
            (0x05BE, 0x05BE), (0x05C0, 0x05C0), (0x05C3, 0x05C3), (0x05C6, 0x05C6),
            (0x05C8, 0x05CF), (0x05EB, 0x05EE), (0x05F5, 0x05FF), (0x0606, 0x060B),
            (0x060E, 0x060F), (0x061B, 0x061B), (0x061D, 0x061F), (0x066A, 0x066A),
            (0x066D, 0x066D), (0x06D4, 0x06D4), (0x06DE, 0x06DE), (0x06E9, 0x06E9),
            (0x06FD, 0x06FE), (0x0700, 0x070E), (0x074B, 0x074C), (0x07B2, 0x07BF),
            (0x07F6, 0x07F7), (0x07F9, 0x07F9), (0x07FB, 0x07FC), (0x07FE, 0x07FF),
            (0x082E, 0x083F), (0x085C, 0x085F), (0x086B, 0x086F), (0x0888, 0x0888),
            (0x0892, 0x0896), (0x0964, 0x0965), (0x0970, 0x0970), (0x0984, 0x0984),
            (0x098D, 0x098E), (0x0991, 0x0992), (0x09A9, 0x09A9), (0x09B1, 0x09B1),
            (0x09B3, 0x09B5), (0x09BA, 0x09BB), (0x09C5, 0x09C6), (0x09C9, 0x09CA),
            (0x09CF, 0x09D6), (0x09D8, 0x09DB), (0x09DE, 0x09DE), (0x09E4, 0x09E5),
            (0x09F2, 0x09FB), (0x09FD, 0x09FD), (0x09FF, 0x0A00), (0x0A04, 0x0A04),
            (0x0A0B, 0x0A0E), (0x0A11, 0x0A12), (0x0A29, 0x0A29), (0x0A31, 0x0A31),
            (0x0A34, 0x0A34), (0x0A37, 0x0A37), (0x0A3A, 0x0A3B), (0x0A3D, 0x0A3D),
            (0x0A43, 0x0A46), (0x0A49, 0x0A4A), (0x0A4E, 0x0A50), (0x0A52, 0x0A58),
            (0x0A5D, 0x0A5D), (0x0A5F, 0x0A65), (0x0A76, 0x0A80), (0x0A84, 0x0A84),
            (0x0A8E, 0x0A8E), (0x0A92, 0x0A92), (0x0AA9, 0x0AA9), (0x0AB1, 0x0AB1),
            (0x0AB4, 0x0AB4), (0x0ABA, 0x0ABB), (0x0AC6, 0x0AC6), (0x0ACA, 0x0ACA),
            (0x0ACE, 0x0ACF), (0x0AD1, 0x0ADF), (0x0AE4, 0x0AE5), (0x0AF0, 0x0AF8),
            (0x0B00, 0x0B00), (0x0B04, 0x0B04), (0x0B0D, 0x0B0E), (0x0B11, 0x0B12),
            (0x0B29, 0x0B29), (0x0B31, 0x0B31), (0x0B34, 0x0B34), (0x0B3A, 0x0B3B),
            (0x0B45, 0x0B46), (0x0B49, 0x0B4A), (0x0B4E, 0x0B54), (0x0B58, 0x0B5B),
            (0x0B5E, 0x0B5E), (0x0B64, 0x0B65), (0x0B70, 0x0B70), (0x0B72, 0x0B81),
            (0x0B84, 0x0B84), (0x0B8B, 0x0B8D), (0x0B91, 0x0B91), (0x0B96, 0x0B98),
            (0x0B9B, 0x0B9B), (0x0B9D, 0x0B9D), (0x0BA0, 0x0BA2), (0x0BA5, 0x0BA7),
            (0x0BAB, 0x0BAD), (0x0BBA, 0x0BBD), (0x0BC3, 0x0BC5), (0x0BC9, 0x0BC9),
            (0x0BCE, 0x0BCF), (0x0BD1, 0x0BD6), (0x0BD8, 0x0BE5), (0x0BF0, 0x0BFF),
            (0x0C0D, 0x0C0D), (0x0C11, 0x0C11), (0x0C29, 0x0C29), (0x0C3A, 0x0C3B),
            (0x0C45, 0x0C45), (0x0C49, 0x0C49), (0x0C4E, 0x0C54), (0x0C57, 0x0C57),
            (0x0C5B, 0x0C5B), (0x0C5E, 0x0C5F), (0x0C64, 0x0C65), (0x0C70, 0x0C7F),
            (0x0C84, 0x0C84), (0x0C8D, 0x0C8D), (0x0C91, 0x0C91), (0x0CA9, 0x0CA9),
            (0x0CB4, 0x0CB4), (0x0CBA, 0x0CBB), (0x0CC5, 0x0CC5), (0x0CC9, 0x0CC9),
            (0x0CCE, 0x0CD4), (0x0CD7, 0x0CDB), (0x0CDF, 0x0CDF), (0x0CE4, 0x0CE5),
            (0x0CF0, 0x0CF0), (0x0CF4, 0x0CFF), (0x0D0D, 0x0D0D), (0x0D11, 0x0D11),
            (0x0D45, 0x0D45), (0x0D49, 0x0D49), (0x0D4F, 0x0D53), (0x0D58, 0x0D5E),
            (0x0D64, 0x0D65), (0x0D70, 0x0D79), (0x0D80, 0x0D80), (0x0D84, 0x0D84),
            (0x0D97, 0x0D99), (0x0DB2, 0x0DB2), (0x0DBC, 0x0DBC), (0x0DBE, 0x0DBF),
            (0x0DC7, 0x0DC9), (0x0DCB, 0x0DCE), (0x0DD5, 0x0DD5), (0x0DD7, 0x0DD7),
            (0x0DE0, 0x0DE5), (0x0DF0, 0x0DF1), (0x0DF4, 0x0E30), (0x0E32, 0x0E33),
            (0x0E3B, 0x0E46), (0x0E4F, 0x0E4F), (0x0E5A, 0x0EB0), (0x0EB2, 0x0EB3),
            (0x0EBD, 0x0EC7), (0x0ECF, 0x0ECF), (0x0EDA, 0x0EFF), (0x0F01, 0x0F17),
            (0x0F1A, 0x0F1F), (0x0F2A, 0x0F34), (0x0F36, 0x0F36), (0x0F38, 0x0F38),
            (0x0F3A, 0x0F3D), (0x0F48, 0x0F48), (0x0F6D, 0x0F70), (0x0F85, 0x0F85),
            (0x0F98, 0x0F98), (0x0FBD, 0x0FC5), (0x0FC7, 0x102A), (0x103F, 0x103F),
            (0x104A, 0x1055), (0x105A, 0x105D), (0x1061, 0x1061), (0x1065, 0x1066),
            (0x106E, 0x1070), (0x1075, 0x1081), (0x108E, 0x108E), (0x109E, 0x109F),
            (0x10C6, 0x10C6), (0x10C8, 0x10CC), (0x10CE, 0x10CF), (0x10FB, 0x10FB),
            (0x1249, 0x1249), (0x124E, 0x124F), (0x1257, 0x1257), (0x1259, 0x1259),
            (0x125E, 0x125F), (0x1289, 0x1289), (0x128E, 0x128F), (0x12B1, 0x12B1),
            (0x12B6, 0x12B7), (0x12BF, 0x12BF), (0x12C1, 0x12C1), (0x12C6, 0x12C7),
            (0x12D7, 0x12D7), (0x1311, 0x1311), (0x1316, 0x1317), (0x135B, 0x135C),
            (0x1360, 0x137F), (0x1390, 0x139F), (0x13F6, 0x13F7), (0x13FE, 0x1400),
            (0x166D, 0x166E), (0x169B, 0x169F), (0x16EB, 0x16ED), (0x16F9, 0x16FF),
            (0x1716, 0x171E), (0x1735, 0x173F), (0x1754, 0x175F), (0x176D, 0x176D),
            (0x1771, 0x1771), (0x1774, 0x17B3), (0x17D4, 0x17DC), (0x17DE, 0x17DF),
            (0x17EA, 0x180A), (0x181A, 0x181F), (0x1879, 0x187F), (0x18AB, 0x18AF),
            (0x18F6, 0x18FF), (0x191F, 0x191F), (0x192C, 0x192F), (0x193C, 0x1945),
            (0x1950, 0x19CF), (0x19DB, 0x19FF), (0x1A1C, 0x1A54), (0x1A5F, 0x1A5F),
            (0x1A7D, 0x1A7E), (0x1A8A, 0x1A8F), (0x1A9A, 0x1AAF), (0x1ADE, 0x1ADF),
            (0x1AEC, 0x1AFF), (0x1B4D, 0x1B4F), (0x1B5A, 0x1B6A), (0x1B74, 0x1B7F),
            (0x1BF4, 0x1BFF), (0x1C38, 0x1C3F), (0x1C4A, 0x1C4C), (0x1C7E, 0x1C7F),
            (0x1C8B, 0x1C8F), (0x1CBB, 0x1CBC), (0x1CC0, 0x1CCF), (0x1CD3, 0x1CD3),
            (0x1CFB, 0x1CFF), (0x1F16, 0x1F17), (0x1F1E, 0x1F1F), (0x1F46, 0x1F47),
            (0x1F4E, 0x1F4F), (0x1F58, 0x1F58), (0x1F5A, 0x1F5A), (0x1F5C, 0x1F5C),
            (0x1F5E, 0x1F5E), (0x1F7E, 0x1F7F), (0x1FB5, 0x1FB5), (0x1FBD, 0x1FBD),
            (0x1FBF, 0x1FC1), (0x1FC5, 0x1FC5), (0x1FCD, 0x1FCF), (0x1FD4, 0x1FD5),
            (0x1FDC, 0x1FDF), (0x1FED, 0x1FF1), (0x1FF5, 0x1FF5), (0x1FFD, 0x1FFF),
            (0x2007, 0x2007), (0x200B, 0x200B), (0x2010, 0x2017), (0x201A, 0x2023),
            (0x2025, 0x2026), (0x2030, 0x203E), (0x2041, 0x2043), (0x2045, 0x2053),
            (0x2055, 0x205E), (0x2065, 0x2065), (0x2070, 0x2070), (0x2072, 0x207E),
            (0x2080, 0x208F), (0x209D, 0x20CF), (0x20F1, 0x2101), (0x2103, 0x2106),
            (0x2108, 0x2109), (0x2114, 0x2114), (0x2116, 0x2118), (0x211E, 0x2123),
            (0x2125, 0x2125), (0x2127, 0x2127), (0x2129, 0x2129), (0x212E, 0x212E),
            (0x213A, 0x213B), (0x2140, 0x2144), (0x214A, 0x214D), (0x214F, 0x215F),
            (0x2189, 0x24B5), (0x24EA, 0x2BFF), (0x2CE5, 0x2CEA), (0x2CF4, 0x2CFF),
            (0x2D26, 0x2D26), (0x2D28, 0x2D2C), (0x2D2E, 0x2D2F), (0x2D68, 0x2D6E),
            (0x2D70, 0x2D7E), (0x2D97, 0x2D9F), (0x2DA7, 0x2DA7), (0x2DAF, 0x2DAF),
            (0x2DB7, 0x2DB7), (0x2DBF, 0x2DBF), (0x2DC7, 0x2DC7), (0x2DCF, 0x2DCF),
            (0x2DD7, 0x2DD7), (0x2DDF, 0x2DDF), (0x2E00, 0x2E2E), (0x2E30, 0x2FFF),
            (0x3001, 0x3004), (0x3006, 0x3029), (0x3030, 0x3030), (0x3036, 0x303A),
            (0x303D, 0x3098), (0x309D, 0x309F), (0x30FB, 0x30FB), (0x3100, 0x3104),
            (0x3130, 0x3130), (0x318F, 0x319F), (0x31C0, 0x31EF), (0x3200, 0x32CF),
            (0x32FF, 0x32FF), (0x3358, 0x9FFF), (0xA48D, 0xA4CF), (0xA4FE, 0xA4FF),
            (0xA60D, 0xA60F), (0xA62C, 0xA63F), (0xA673, 0xA673), (0xA67E, 0xA67E),
            (0xA6F2, 0xA707), (0xA7DD, 0xA7F0), (0xA828, 0xA82B), (0xA82D, 0xA83F),
            (0xA874, 0xA87F), (0xA8C6, 0xA8CF), (0xA8DA, 0xA8DF), (0xA8F8, 0xA8FA),
            (0xA8FC, 0xA8FC), (0xA92E, 0xA92F), (0xA954, 0xA95F), (0xA97D, 0xA97F),
            (0xA9C1, 0xA9CE), (0xA9DA, 0xA9E4), (0xA9E6, 0xA9EF), (0xA9FA, 0xA9FF),
            (0xAA37, 0xAA3F), (0xAA4E, 0xAA4F), (0xAA5A, 0xAA7A), (0xAA7E, 0xAAAF),
            (0xAAB1, 0xAAB1), (0xAAB5, 0xAAB6), (0xAAB9, 0xAABD), (0xAAC0, 0xAAC0),
            (0xAAC2, 0xAADF), (0xAAF0, 0xAAF1), (0xAAF7, 0xAB00), (0xAB07, 0xAB08),
            (0xAB0F, 0xAB10), (0xAB17, 0xAB1F), (0xAB27, 0xAB27), (0xAB2F, 0xAB2F),
            (0xAB6A, 0xAB6F), (0xABEB, 0xABEB), (0xABEE, 0xABEF), (0xABFA, 0xABFF),
            (0xD7A4, 0xD7AF), (0xD7C7, 0xD7CA), (0xD7FC, 0xFAFF), (0xFB07, 0xFB12),
            (0xFB18, 0xFB1C), (0xFB29, 0xFB29), (0xFB37, 0xFB37), (0xFB3D, 0xFB3D),
            (0xFB3F, 0xFB3F), (0xFB42, 0xFB42), (0xFB45, 0xFB45), (0xFBB2, 0xFBD2),
            (0xFD3E, 0xFD4F), (0xFD90, 0xFD91), (0xFDC8, 0xFDEF), (0xFDFC, 0xFDFF),
            (0xFE10, 0xFE12), (0xFE14, 0xFE1F), (0xFE30, 0xFE32), (0xFE35, 0xFE4C),
            (0xFE51, 0xFE51), (0xFE53, 0xFE53), (0xFE56, 0xFE6F), (0xFE75, 0xFE75),
            (0xFEFD, 0xFEFE), (0xFF00, 0xFF06), (0xFF08, 0xFF0B), (0xFF0D, 0xFF0D),
            (0xFF0F, 0xFF0F), (0xFF1C, 0xFF20), (0xFF3B, 0xFF3E), (0xFF40, 0xFF40),
            (0xFF5B, 0xFF65), (0xFFBF, 0xFFC1), (0xFFC8, 0xFFC9), (0xFFD0, 0xFFD1),
            (0xFFD8, 0xFFD9), (0xFFDD, 0xFFF8), (0xFFFC, 0xFFFF), (0x1000C, 0x1000C),
            (0x10027, 0x10027), (0x1003B, 0x1003B), (0x1003E, 0x1003E), (0x1004E, 0x1004F),
            (0x1005E, 0x1007F), (0x100FB, 0x1013F), (0x10175, 0x101FC), (0x101FE, 0x1027F),
            (0x1029D, 0x1029F), (0x102D1, 0x102DF), (0x102E1, 0x102FF), (0x10320, 0x1032C),
            (0x1034B, 0x1034F), (0x1037B, 0x1037F), (0x1039E, 0x1039F), (0x103C4, 0x103C7),
            (0x103D0, 0x103D0), (0x103D6, 0x103FF), (0x1049E, 0x1049F), (0x104AA, 0x104AF),
            (0x104D4, 0x104D7), (0x104FC, 0x104FF), (0x10528, 0x1052F), (0x10564, 0x1056F),
            (0x1057B, 0x1057B), (0x1058B, 0x1058B), (0x10593, 0x10593), (0x10596, 0x10596),
            (0x105A2, 0x105A2), (0x105B2, 0x105B2), (0x105BA, 0x105BA), (0x105BD, 0x105BF),
            (0x105F4, 0x105FF), (0x10737, 0x1073F), (0x10756, 0x1075F), (0x10768, 0x1077F),
            (0x10786, 0x10786), (0x107B1, 0x107B1), (0x107BB, 0x107FF), (0x10806, 0x10807),
            (0x10809, 0x10809), (0x10836, 0x10836), (0x10839, 0x1083B), (0x1083D, 0x1083E),
            (0x10856, 0x1085F), (0x10877, 0x1087F), (0x1089F, 0x108DF), (0x108F3, 0x108F3),
            (0x108F6, 0x108FF), (0x10916, 0x1091F), (0x1093A, 0x1093F), (0x1095A, 0x1097F),
            (0x109B8, 0x109BD), (0x109C0, 0x109FF), (0x10A04, 0x10A04), (0x10A07, 0x10A0B),
            (0x10A14, 0x10A14), (0x10A18, 0x10A18), (0x10A36, 0x10A37), (0x10A3B, 0x10A3E),
            (0x10A40, 0x10A5F), (0x10A7D, 0x10A7F), (0x10A9D, 0x10ABF), (0x10AC8, 0x10AC8),
            (0x10AE7, 0x10AFF), (0x10B36, 0x10B3F), (0x10B56, 0x10B5F), (0x10B73, 0x10B7F),
            (0x10B92, 0x10BFF), (0x10C49, 0x10C7F), (0x10CB3, 0x10CBF), (0x10CF3, 0x10CFF),
            (0x10D28, 0x10D2F), (0x10D3A, 0x10D3F), (0x10D66, 0x10D68), (0x10D6E, 0x10D6E),
            (0x10D86, 0x10E7F), (0x10EAA, 0x10EAA), (0x10EAD, 0x10EAF), (0x10EB2, 0x10EC1),
            (0x10EC8, 0x10EF9), (0x10F1D, 0x10F26), (0x10F28, 0x10F2F), (0x10F51, 0x10F6F),
            (0x10F86, 0x10FAF), (0x10FC5, 0x10FDF), (0x10FF7, 0x10FFF), (0x11047, 0x11065),
            (0x11076, 0x1107E), (0x110BB, 0x110BC), (0x110BE, 0x110C1), (0x110C3, 0x110CC),
            (0x110CE, 0x110CF), (0x110E9, 0x110EF), (0x110FA, 0x110FF), (0x11135, 0x11135),
            (0x11140, 0x11143), (0x11148, 0x1114F), (0x11174, 0x11175), (0x11177, 0x1117F),
            (0x111C5, 0x111C8), (0x111CD, 0x111CD), (0x111DB, 0x111DB), (0x111DD, 0x111FF),
            (0x11212, 0x11212), (0x11238, 0x1123D), (0x11242, 0x1127F), (0x11287, 0x11287),
            (0x11289, 0x11289), (0x1128E, 0x1128E), (0x1129E, 0x1129E), (0x112A9, 0x112AF),
            (0x112EB, 0x112EF), (0x112FA, 0x112FF), (0x11304, 0x11304), (0x1130D, 0x1130E),
            (0x11311, 0x11312), (0x11329, 0x11329), (0x11331, 0x11331), (0x11334, 0x11334),
            (0x1133A, 0x1133A), (0x11345, 0x11346), (0x11349, 0x1134A), (0x1134E, 0x1134F),
            (0x11351, 0x11356), (0x11358, 0x1135C), (0x11364, 0x11365), (0x1136D, 0x1136F),
            (0x11375, 0x1137F), (0x1138A, 0x1138A), (0x1138C, 0x1138D), (0x1138F, 0x1138F),
            (0x113B6, 0x113B6), (0x113C1, 0x113C1), (0x113C3, 0x113C4), (0x113C6, 0x113C6),
            (0x113CB, 0x113CB), (0x113D4, 0x113E0), (0x113E3, 0x113FF), (0x1144B, 0x1144F),
            (0x1145A, 0x1145D), (0x11462, 0x1147F), (0x114C6, 0x114C6), (0x114C8, 0x114CF),
            (0x114DA, 0x1157F), (0x115B6, 0x115B7), (0x115C1, 0x115D7), (0x115DE, 0x115FF),
            (0x11641, 0x11643), (0x11645, 0x1164F), (0x1165A, 0x1167F), (0x116B9, 0x116BF),
            (0x116CA, 0x116CF), (0x116E4, 0x1171C), (0x1172C, 0x1172F), (0x1173A, 0x117FF),
            (0x1183B, 0x1189F), (0x118EA, 0x118FE), (0x11907, 0x11908), (0x1190A, 0x1190B),
            (0x11914, 0x11914), (0x11917, 0x11917), (0x11936, 0x11936), (0x11939, 0x1193A),
            (0x11944, 0x1194F), (0x1195A, 0x1199F), (0x119A8, 0x119A9), (0x119D8, 0x119D9),
            (0x119E2, 0x119E2), (0x119E5, 0x119FF), (0x11A3F, 0x11A46), (0x11A48, 0x11A4F),
            (0x11A9A, 0x11A9C), (0x11A9E, 0x11AAF), (0x11AF9, 0x11B5F), (0x11B68, 0x11BBF),
            (0x11BE1, 0x11BEF), (0x11BFA, 0x11BFF), (0x11C09, 0x11C09), (0x11C37, 0x11C37),
            (0x11C41, 0x11C4F), (0x11C5A, 0x11C71), (0x11C90, 0x11C91), (0x11CA8, 0x11CA8),
            (0x11CB7, 0x11CFF), (0x11D07, 0x11D07), (0x11D0A, 0x11D0A), (0x11D37, 0x11D39),
            (0x11D3B, 0x11D3B), (0x11D3E, 0x11D3E), (0x11D48, 0x11D4F), (0x11D5A, 0x11D5F),
            (0x11D66, 0x11D66), (0x11D69, 0x11D69), (0x11D8F, 0x11D8F), (0x11D92, 0x11D92),
            (0x11D99, 0x11D9F), (0x11DAA, 0x11DAF), (0x11DDC, 0x11DDF), (0x11DEA, 0x11EDF),
            (0x11EF7, 0x11EFF), (0x11F11, 0x11F11), (0x11F3B, 0x11F3D), (0x11F43, 0x11F4F),
            (0x11F5B, 0x11FAF), (0x11FB1, 0x11FFF), (0x1239A, 0x123FF), (0x1246F, 0x1247F),
            (0x12544, 0x12F8F), (0x12FF1, 0x12FFF), (0x13456, 0x1345F), (0x143FB, 0x143FF),
            (0x14647, 0x160FF), (0x1613A, 0x167FF), (0x16A39, 0x16A3F), (0x16A5F, 0x16A5F),
            (0x16A6A, 0x16A6F), (0x16ABF, 0x16ABF), (0x16ACA, 0x16ACF), (0x16AEE, 0x16AEF),
            (0x16AF5, 0x16AFF), (0x16B37, 0x16B3F), (0x16B44, 0x16B4F), (0x16B5A, 0x16B62),
            (0x16B78, 0x16B7C), (0x16B90, 0x16D3F), (0x16D6D, 0x16D6F), (0x16D7A, 0x16E3F),
            (0x16E80, 0x16E9F), (0x16EB9, 0x16EBA), (0x16ED4, 0x16EFF), (0x16F4B, 0x16F4E),
            (0x16F88, 0x16F8E), (0x16FA0, 0x16FDF), (0x16FE2, 0x16FE2), (0x16FE5, 0x16FEF),
            (0x16FF2, 0x1AFEF), (0x1AFF4, 0x1AFF4), (0x1AFFC, 0x1AFFC), (0x1AFFF, 0x1AFFF),
            (0x1B001, 0x1B11F), (0x1B123, 0x1B154), (0x1B156, 0x1B163), (0x1B168, 0x1BBFF),
            (0x1BC6B, 0x1BC6F), (0x1BC7D, 0x1BC7F), (0x1BC89, 0x1BC8F), (0x1BC9A, 0x1BC9C),
            (0x1BC9F, 0x1BC9F), (0x1BCA4, 0x1CCEF), (0x1CCFA, 0x1CEFF), (0x1CF2E, 0x1CF2F),
            (0x1CF47, 0x1D164), (0x1D16A, 0x1D16C), (0x1D183, 0x1D184), (0x1D18C, 0x1D1A9),
            (0x1D1AE, 0x1D241), (0x1D245, 0x1D3FF), (0x1D455, 0x1D455), (0x1D49D, 0x1D49D),
            (0x1D4A0, 0x1D4A1), (0x1D4A3, 0x1D4A4), (0x1D4A7, 0x1D4A8), (0x1D4AD, 0x1D4AD),
            (0x1D4BA, 0x1D4BA), (0x1D4BC, 0x1D4BC), (0x1D4C4, 0x1D4C4), (0x1D506, 0x1D506),
            (0x1D50B, 0x1D50C), (0x1D515, 0x1D515), (0x1D51D, 0x1D51D), (0x1D53A, 0x1D53A),
            (0x1D53F, 0x1D53F), (0x1D545, 0x1D545), (0x1D547, 0x1D549), (0x1D551, 0x1D551),
            (0x1D6A6, 0x1D6A7), (0x1D6C1, 0x1D6C1), (0x1D6DB, 0x1D6DB), (0x1D6FB, 0x1D6FB),
            (0x1D715, 0x1D715), (0x1D735, 0x1D735), (0x1D74F, 0x1D74F), (0x1D76F, 0x1D76F),
            (0x1D789, 0x1D789), (0x1D7A9, 0x1D7A9), (0x1D7C3, 0x1D7C3), (0x1D7CC, 0x1D7CD),
            (0x1D800, 0x1D9FF), (0x1DA37, 0x1DA3A), (0x1DA6D, 0x1DA74), (0x1DA76, 0x1DA83),
            (0x1DA85, 0x1DA9A), (0x1DAA0, 0x1DAA0), (0x1DAB0, 0x1DEFF), (0x1DF1F, 0x1DF24),
            (0x1DF2B, 0x1DFFF), (0x1E007, 0x1E007), (0x1E019, 0x1E01A), (0x1E022, 0x1E022),
            (0x1E025, 0x1E025), (0x1E02B, 0x1E02F), (0x1E06E, 0x1E08E), (0x1E090, 0x1E0FF),
            (0x1E12D, 0x1E12F), (0x1E13E, 0x1E13F), (0x1E14A, 0x1E14D), (0x1E14F, 0x1E28F),
            (0x1E2AF, 0x1E2BF), (0x1E2FA, 0x1E4CF), (0x1E4FA, 0x1E5CF), (0x1E5FB, 0x1E6BF),
            (0x1E6DF, 0x1E6DF), (0x1E6F6, 0x1E6FD), (0x1E700, 0x1E7DF), (0x1E7E7, 0x1E7E7),
            (0x1E7EC, 0x1E7EC), (0x1E7EF, 0x1E7EF), (0x1E7FF, 0x1E7FF), (0x1E8C5, 0x1E8CF),
            (0x1E8D7, 0x1E8FF), (0x1E94C, 0x1E94F), (0x1E95A, 0x1EDFF), (0x1EE04, 0x1EE04),
            (0x1EE20, 0x1EE20), (0x1EE23, 0x1EE23), (0x1EE25, 0x1EE26), (0x1EE28, 0x1EE28),
            (0x1EE33, 0x1EE33), (0x1EE38, 0x1EE38), (0x1EE3A, 0x1EE3A), (0x1EE3C, 0x1EE41),
            (0x1EE43, 0x1EE46), (0x1EE48, 0x1EE48), (0x1EE4A, 0x1EE4A), (0x1EE4C, 0x1EE4C),
            (0x1EE50, 0x1EE50), (0x1EE53, 0x1EE53), (0x1EE55, 0x1EE56), (0x1EE58, 0x1EE58),
            (0x1EE5A, 0x1EE5A), (0x1EE5C, 0x1EE5C), (0x1EE5E, 0x1EE5E), (0x1EE60, 0x1EE60),
            (0x1EE63, 0x1EE63), (0x1EE65, 0x1EE66), (0x1EE6B, 0x1EE6B), (0x1EE73, 0x1EE73),
            (0x1EE78, 0x1EE78), (0x1EE7D, 0x1EE7D), (0x1EE7F, 0x1EE7F), (0x1EE8A, 0x1EE8A),
            (0x1EE9C, 0x1EEA0), (0x1EEA4, 0x1EEA4), (0x1EEAA, 0x1EEAA), (0x1EEBC, 0x1F12F),
            (0x1F14A, 0x1F14F), (0x1F16A, 0x1F16F), (0x1F18A, 0x1F1E5), (0x1F200, 0x1F3FA),
            (0x1F400, 0x1FBEF), (0x1FBFA, 0xE0000), (0xE0002, 0xE001F), (0xE0080, 0xE00FF),
            (0xE01F0, 0x10FFFF),
        ])),
    ),
    (
        "regionalindicator",
        DatasetEntry::Class(CharClass::new(&[
            (0x1F1E6, 0x1F1FF),
        ])),
    ),
    (
        "singlequote",
        DatasetEntry::Class(CharClass::new(&[
            (0x0027, 0x0027),
        ])),
    ),
    (
        "wsegspace",
        DatasetEntry::Class(CharClass::new(&[
            (0x0020, 0x0020), (0x1680, 0x1680), (0x2000, 0x2006), (0x2008, 0x200A),
            (0x205F, 0x205F), (0x3000, 0x3000),
        ])),
    ),
    (
        "zwj",
        DatasetEntry::Class(CharClass::new(&[
            (0x200D, 0x200D),
        ])),
    ),
]);

pub(crate) static ASCII: ValueTable = ValueTable::new(&[
    (
        "^aletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0040), (0x005B, 0x0060), (0x007B, 0x007F),
        ])),
    ),
    (
        "^cr",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x000C), (0x000E, 0x007F),
        ])),
    ),
    (
        "^doublequote",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0021), (0x0023, 0x007F),
        ])),
    ),
    (
        "^ebase",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^ebasegaz",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^emodifier",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^extend",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^extendnumlet",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x005E), (0x0060, 0x007F),
        ])),
    ),
    (
        "^format",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^glueafterzwj",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^hebrewletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^katakana",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^lf",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0009), (0x000B, 0x007F),
        ])),
    ),
    (
        "^midletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0039), (0x003B, 0x007F),
        ])),
    ),
    (
        "^midnum",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002B), (0x002D, 0x003A), (0x003C, 0x007F),
        ])),
    ),
    (
        "^midnumlet",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002D), (0x002F, 0x007F),
        ])),
    ),
    (
        "^newline",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x000A), (0x000D, 0x007F),
        ])),
    ),
    (
        "^numeric",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x002F), (0x003A, 0x007F),
        ])),
    ),
    (
        "^other",
        DatasetEntry::Class(CharClass::new(&[
            (0x000A, 0x000D), (0x0020, 0x0020), (0x0022, 0x0022), (0x0027, 0x0027),
            (0x002C, 0x002C), (0x002E, 0x002E), (0x0030, 0x003B), (0x0041, 0x005A),
            (0x005F, 0x005F), (0x0061, 0x007A),
        ])),
    ),
    (
        "^regionalindicator",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "^singlequote",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0026), (0x0028, 0x007F),
        ])),
    ),
    (
        "^wsegspace",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x001F), (0x0021, 0x007F),
        ])),
    ),
    (
        "^zwj",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x007F),
        ])),
    ),
    (
        "aletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x0041, 0x005A), (0x0061, 0x007A),
        ])),
    ),
    (
        "cr",
        DatasetEntry::Class(CharClass::new(&[
            (0x000D, 0x000D),
        ])),
    ),
    (
        "doublequote",
        DatasetEntry::Class(CharClass::new(&[
            (0x0022, 0x0022),
        ])),
    ),
    (
        "ebase",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "ebasegaz",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "emodifier",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "extend",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "extendnumlet",
        DatasetEntry::Class(CharClass::new(&[
            (0x005F, 0x005F),
        ])),
    ),
    (
        "format",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "glueafterzwj",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "hebrewletter",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "katakana",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "lf",
        DatasetEntry::Class(CharClass::new(&[
            (0x000A, 0x000A),
        ])),
    ),
    (
        "midletter",
        DatasetEntry::Class(CharClass::new(&[
            (0x003A, 0x003A),
        ])),
    ),
    (
        "midnum",
        DatasetEntry::Class(CharClass::new(&[
            (0x002C, 0x002C), (0x003B, 0x003B),
        ])),
    ),
    (
        "midnumlet",
        DatasetEntry::Class(CharClass::new(&[
            (0x002E, 0x002E),
        ])),
    ),
    (
        "newline",
        DatasetEntry::Class(CharClass::new(&[
            (0x000B, 0x000C),
        ])),
    ),
    (
        "numeric",
        DatasetEntry::Class(CharClass::new(&[
            (0x0030, 0x0039),
        ])),
    ),
    (
        "other",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0009), (0x000E, 0x001F), (0x0021, 0x0021), (0x0023, 0x0026),
            (0x0028, 0x002B), (0x002D, 0x002D), (0x002F, 0x002F), (0x003C, 0x0040),
            (0x005B, 0x005E), (0x0060, 0x0060), (0x007B, 0x007F),
        ])),
    ),
    (
        "regionalindicator",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
    (
        "singlequote",
        DatasetEntry::Class(CharClass::new(&[
            (0x0027, 0x0027),
        ])),
    ),
    (
        "wsegspace",
        DatasetEntry::Class(CharClass::new(&[
            (0x0020, 0x0020),
        ])),
    ),
    (
        "zwj",
        DatasetEntry::Class(CharClass::new(&[])),
    ),
]);
