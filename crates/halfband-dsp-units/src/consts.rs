// SPDX-License-Identifier: LGPL-3.0-or-later

//! Ready-made half-band coefficient tables.
//!
//! Coefficients are sorted in ascending order and interleaved between the
//! two polyphase paths, which is the layout expected by
//! [`Downsampler2x`](crate::sampling::Downsampler2x) and
//! [`Upsampler2x`](crate::sampling::Upsampler2x). All tables have a
//! narrow transition band around a quarter of the input sample rate.

/// 4 stages, ~70 dB stopband rejection, wide transition band.
pub const HALFBAND_4: [f64; 4] = [
    0.079_866_426_236_357_51,
    0.283_829_344_874_109_93,
    0.545_353_651_071_132_2,
    0.834_411_891_480_737_9,
];

/// 8 stages, ~69 dB stopband rejection.
pub const HALFBAND_8: [f64; 8] = [
    0.077_115_079_832_416_22,
    0.265_968_526_521_094_6,
    0.482_070_625_061_047_2,
    0.665_104_153_263_495_7,
    0.796_820_471_331_579_7,
    0.884_101_508_550_615_9,
    0.941_251_427_774_047_1,
    0.982_005_414_188_607_5,
];

/// 10 stages, ~86 dB stopband rejection.
pub const HALFBAND_10: [f64; 10] = [
    0.051_457_617_441_190_984,
    0.186_219_062_519_893_34,
    0.359_786_560_705_670_17,
    0.529_951_372_847_964,
    0.672_547_593_103_469_3,
    0.781_025_752_748_951_4,
    0.859_088_492_824_993_9,
    0.914_181_568_760_530_8,
    0.954_020_986_786_078_7,
    0.985_475_023_014_907,
];

/// 12 stages, ~104 dB stopband rejection.
pub const HALFBAND_12: [f64; 12] = [
    0.036_681_502_163_648_017,
    0.136_547_624_631_957_71,
    0.274_631_759_379_454_1,
    0.423_138_617_436_566_67,
    0.561_098_969_787_919_5,
    0.677_540_049_974_161_6,
    0.769_741_833_862_266,
    0.839_889_624_849_638,
    0.892_260_818_003_878_9,
    0.931_541_959_963_183_9,
    0.962_094_548_378_084,
    0.987_816_370_732_897_1,
];
