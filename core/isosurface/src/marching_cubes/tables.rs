//! Triangulation table for marching cubes.
//!
//! Each configuration is packed into a `u64`: the lowest nibble holds the triangle count (0..=5), followed by one
//! nibble per triangle vertex holding the index of the cell edge (see [`crate::edge::EDGES`]) the vertex lies on.
//! Read the hexadecimal literals right to left: `0x8401` is one triangle over edges 0, 4, and 8.

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Triangulation(u64);

impl Triangulation {
  #[inline]
  pub const fn of(case: u8) -> Self { Self(TRIANGULATIONS[case as usize]) }

  #[inline]
  pub const fn triangle_count(&self) -> usize { (self.0 & 0xF) as usize }

  /// Edge of the `i`th triangle vertex, over all triangles.
  #[inline]
  pub const fn edge(&self, i: usize) -> u8 { ((self.0 >> (4 + 4 * i)) & 0xF) as u8 }

  /// Triangles as triples of edge indices, in winding order.
  #[inline]
  pub fn triangles(self) -> impl Iterator<Item=[u8; 3]> {
    (0..self.triangle_count()).map(move |t| [self.edge(3 * t), self.edge(3 * t + 1), self.edge(3 * t + 2)])
  }
}

pub const TRIANGULATIONS: [u64; 256] = [
  0x0, 0x8401, 0x9051, 0x9845942, // 0..3
  0x4A11, 0x8A10812, 0x594A12, 0x8A99A5A153, // 4..7
  0x51B1, 0x4081B52, 0xB901B02, 0x98BB818413, // 8..11
  0x54AB5A2, 0xAB88B0B503, 0xB9AA949043, 0xB98AB82, // 12..15
  0x6821, 0x6402602, 0x8260592, 0x4566525923, // 16..19
  0x682A142, 0x2112A26A3, 0x4A12685903, 0x592152126A164, // 20..23
  0xB516822, 0x51B0264063, 0x82601B90B3, 0xB919619261644, // 24..27
  0x682AB54A53, 0x250AB5A526A24, 0x90494AB9A6824, 0xAB9A926A23, // 28..31
  0x7291, 0x2978402, 0x5720522, 0x5744787283, // 32..35
  0x9724A12, 0x2978A10813, 0x14A5720523, 0x18A5711787284, // 36..39
  0x97251B2, 0x9721B58403, 0x122171B73, 0xB717211242844, // 40..43
  0x97254AB5A3, 0xB50B08AB82974, 0x2070A704A7AB4, 0x8AB8B72873, // 44..47
  0x7689782, 0x6477494093, 0x7655606803, 0x5747642, // 48..51
  0x4A18976873, 0x109619A166974, 0x68060576514A4, 0x57656A15A3, // 52..55
  0xB517689783, 0x409497647B514, 0xB0176BB606804, 0x764741B713, // 56..59
  0x976896B54AB44, 0x970B506A0AB0765, 0x4A0680B70760AB5, 0xAB6B762, // 60..63
  0xA631, 0x84063A2, 0x590A632, 0xA634598493, // 64..67
  0x4631432, 0x1033060863, 0x594631433, 0x3158356388594, // 68..71
  0x1B5A632, 0xA63084B513, 0x3A6B901B03, 0x84181B98B3A64, // 72..75
  0x46556B63B3, 0xB503B03086384, 0x604B90B063B64, 0xB98B863B63, // 76..79
  0xA823A22, 0x2300343A43, 0x90523A82A3, 0x392459493A434, // 80..83
  0x3122181483, 0x2303102, 0x1481823129054, 0x2312159253, // 84..87
  0x1B5A823A23, 0x3A434023051B4, 0x901B91823A834, 0x41B43A4924234B95, // 88..91
  0x23B42B8244B54, 0x2303B50B3, 0x48249043B4B94235, 0xB939232, // 92..95
  0x63A2972, 0x8403A69723, 0x63A2057253, 0x728784574A634, // 96..99
  0x7293146343, 0x860631037294, 0x7205706314614, 0x8638728158578315, // 100..103
  0xB51297A633, 0xB512973A68404, 0x1B717201263A4, 0x28424172171BA635, // 104..107
  0x63B6B54659724, 0x3B53506306089725, 0xB72B63B04B46B205, 0x728B783B83864, // 108..111
  0x89AA939733, 0x97309303A40A4, 0x5707A073A0A84, 0x457473A433, // 112..115
  0x1738978714814, 0x3103097393, 0x8058148738318575, 0x5717312, // 116..119
  0x97393A89A1B54, 0x9707340343AB515, 0x73A71B7807017A85, 0x1B7417A47A734, // 120..123
  0x3B53973483893545, 0xB503B07307094, 0xB734802, 0x3B71, // 124..127
  0xB371, 0x7B38402, 0x7B39052, 0x7B39845943, // 128..131
  0xA1437B2, 0xB37108A183, 0x59037B4A13, 0xA15A598A97B34, // 132..135
  0x7513712, 0x4081375173, 0x1300393793, 0x7139877818414, // 136..139
  0x5477434A33, 0x750A7037AA084, 0x79390330A04A4, 0x98A9A37933, // 140..143
  0x37B6822, 0x37B6402603, 0x7B30596823, 0x59252645637B4, // 144..147
  0x68214A7B33, 0x26A2A1021B374, 0x7B30592684A14, 0x159192A12A267B35, // 148..151
  0x2687513713, 0x5137534026424, 0x3793901308264, 0x9269379419139645, // 152..155
  0x4A34375472684, 0xA37A26A50A02A755, 0x4A0A39039376825, 0x379A396A96924, // 156..159
  0x9B32932, 0x849B32933, 0x20330B05B3, 0x32B24B284B454, // 160..163
  0xA14329B393, 0xB329B2A108A04, 0x5B0B3203A144, 0x5B35A152858A5325, // 164..167
  0x3211252953, 0x2952513214084, 0x3201302, 0x1321284183, // 168..171
  0x9325499434A34, 0x5085295A353258A5, 0x320304A343, 0x8A2A322, // 172..175
  0x9B88B6B363, 0x649B00B6B364, 0x5B0B300383684, 0x64565B36B3, // 176..179
  0xB36B689B84A14, 0x6A16B360969B6105, 0x368380B30B054A15, 0xB365B615616A4, // 180..183
  0x1353853685894, 0x9519409369649135, 0x130368063, 0x6434132, // 184..187
  0x36834A3953543895, 0x9506A32, 0x4A30438038364, 0x6A31, // 188..191
  0xBA67B62, 0x84067BA6B3, 0x590BA67B63, 0x7BA67A5984584, // 192..195
  0x6744717B13, 0xB167B6B08604, 0x7B17146740594, 0x15917B1861671985, // 196..199
  0x75665A51A3, 0x51A5A67568404, 0x191691A69674, 0x1A61841791981675, // 200..203
  0x7546742, 0x6756508603, 0x4674790493, 0x6787982, // 204..207
  0xA8BB878273, 0x27A0740AA7B4, 0x82787BA8B5904, 0x27B2592A42452BA5, // 208..211
  0x7B12712148244, 0x102127B173, 0x27B2B18218145905, 0x7B12719219154, // 212..215
  0x81A7517182784, 0xA40A51A27A75A025, 0x79078271A7A87015, 0x792A412, // 216..219
  0x7547482783, 0x7525022, 0x9047942742484, 0x2791, // 220..223
  0xBA99A2A623, 0xA62A29BA90844, 0x520BA55A2A624, 0x2842A625B2BA2455, // 224..227
  0x9B16912966144, 0x6296086B161069B5, 0xB14B05B62B20B465, 0x5B18622, // 228..231
  0x9525122161A64, 0x1A61625125298405, 0x20121A62A3, 0x84128162161A4, // 232..235
  0x5465629523, 0x2956258658504, 0x4606202, 0x8621, // 236..239
  0x9B8BA82, 0x9BA9A40943, 0xBA8B805B03, 0x45A5BA2, // 240..243
  0x89B8B14813, 0x9B0B102, 0x5B80B48B4B14, 0x15B1, // 244..247
  0xA89A951A53, 0x51A95A09A0A44, 0xA818012, 0xA411, // 248..251
  0x8949542, 0x951, 0x4801, 0x0, // 252..255
];
