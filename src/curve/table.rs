//! Precomputed multiples of the base point.
//!
//! Entry `i` holds `2^i * B` in affine form, so `z = 1` is implied and only
//! `x`, `y` and `t = x*y` are stored. Constant-time base-point
//! multiplication adds each entry under the corresponding scalar bit.

use super::field::FieldElement;

/// An affine multiple of the base point.
pub(crate) struct BaseMultiple {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) t: FieldElement,
}

#[rustfmt::skip]
pub(crate) static BASE_MULTIPLES: [BaseMultiple; 256] = [
    // 2^0 * B
    BaseMultiple {
        x: FieldElement([0xd51a, 0x8f25, 0x2d60, 0xc956, 0xa7b2, 0x9525, 0xc760, 0x692c, 0xdc5c, 0xfdd6, 0xe231, 0xc0a4, 0x53fe, 0xcd6e, 0x36d3, 0x2169]),
        y: FieldElement([0x6658, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666, 0x6666]),
        t: FieldElement([0xdda3, 0xa5b7, 0x8ab3, 0x6dde, 0x52f5, 0x7751, 0x9f80, 0x20f0, 0xe37d, 0x64ab, 0x4e8e, 0x66ea, 0x7665, 0xd78b, 0x5f0f, 0x6787]),
    },
    // 2^1 * B
    BaseMultiple {
        x: FieldElement([0xce0e, 0x2843, 0xa14e, 0x83c5, 0xa45f, 0x15d7, 0x8e45, 0x080d, 0xe7ac, 0x1833, 0x3b7d, 0x3d04, 0x046c, 0x9f5a, 0x384c, 0x36ab]),
        y: FieldElement([0xa3c9, 0x6af8, 0x46ae, 0x0e5f, 0x5156, 0x6438, 0x0f51, 0x9739, 0x1f56, 0xc9a2, 0x5ee8, 0x1da2, 0x29c2, 0x0923, 0xcdf3, 0x2260]),
        t: FieldElement([0xb401, 0x6d69, 0x3f55, 0xb71a, 0x2402, 0xc1f7, 0xacc9, 0x5d79, 0xb413, 0x7303, 0x5f08, 0x1de5, 0x68dc, 0x0b2f, 0xa785, 0x2498]),
    },
    // 2^2 * B
    BaseMultiple {
        x: FieldElement([0xf870, 0xc4c9, 0xa657, 0x493a, 0x1547, 0x93ce, 0x9ec1, 0x1a73, 0x20f9, 0x7a35, 0xd4b8, 0x8325, 0xf146, 0x56cf, 0xa8db, 0x203d]),
        y: FieldElement([0x112f, 0xca32, 0xab61, 0xdf38, 0x0ff0, 0xea2f, 0x2832, 0x4cf2, 0x716c, 0x80d5, 0xb885, 0x470e, 0x95e1, 0xcb15, 0xe827, 0x47d0]),
        t: FieldElement([0x1358, 0x728a, 0x22f6, 0x5f8f, 0x07ca, 0xb6dd, 0xe31e, 0x7195, 0x2960, 0xc67c, 0xba6a, 0x7214, 0x260c, 0xd873, 0x3cd8, 0x2278]),
    },
    // 2^3 * B
    BaseMultiple {
        x: FieldElement([0x84c8, 0x08a5, 0xfdbc, 0x3b87, 0x8b99, 0x8069, 0xc67b, 0xeb3a, 0xcf93, 0xf84e, 0x2d5c, 0x4286, 0x71b6, 0x97d7, 0xe15f, 0x6742]),
        y: FieldElement([0xb9b4, 0xfc37, 0x5ba9, 0x1e2f, 0xe493, 0x621e, 0x3cfc, 0x8178, 0xf38f, 0x668a, 0x6f09, 0x6ead, 0x7379, 0xc9e5, 0x0600, 0x21d3]),
        t: FieldElement([0x51bf, 0xd41a, 0xf41a, 0x6fbe, 0x2bf5, 0x344c, 0xce6d, 0x45f0, 0xd993, 0x38b3, 0xc29b, 0x1608, 0xeae1, 0xedf7, 0x59ec, 0x2c4f]),
    },
    // 2^4 * B
    BaseMultiple {
        x: FieldElement([0xf9f8, 0x6c28, 0x596d, 0x59b2, 0x2374, 0xe7bf, 0x8d33, 0x0957, 0x9c91, 0x0824, 0x2b15, 0xb8e2, 0x3aee, 0x27e5, 0x8606, 0x23a4]),
        y: FieldElement([0x27eb, 0xc167, 0xab37, 0xd87a, 0x9c27, 0x8e07, 0x11ff, 0xb06a, 0x6e78, 0x3aad, 0x0f2e, 0x9f98, 0xc372, 0x827f, 0x96f2, 0x7096]),
        t: FieldElement([0x9bd6, 0xceff, 0x9a1d, 0x644f, 0x936a, 0x1911, 0x39ec, 0xafc8, 0xe459, 0x1534, 0x8a6b, 0x5a1f, 0x6b41, 0x9f6a, 0x4140, 0x11f6]),
    },
    // 2^5 * B
    BaseMultiple {
        x: FieldElement([0x4f26, 0x977e, 0x40f6, 0x4fdd, 0x52fc, 0xf978, 0x3190, 0xe603, 0x567d, 0x0b39, 0x561d, 0x8582, 0x1af9, 0x1742, 0x6c69, 0x39cf]),
        y: FieldElement([0xd269, 0x3a06, 0x394f, 0xf92d, 0x4038, 0x4c8c, 0x05e7, 0xb412, 0x8b78, 0xc0f8, 0x93ec, 0x7ade, 0xce6b, 0xe12c, 0xa90e, 0x4434]),
        t: FieldElement([0xc69f, 0x59e2, 0x747f, 0x23c1, 0xa6b5, 0x76b8, 0x56c1, 0x714e, 0xa595, 0x6d47, 0x8454, 0xd3a3, 0x6c6d, 0x1274, 0x1179, 0x6df8]),
    },
    // 2^6 * B
    BaseMultiple {
        x: FieldElement([0xa40b, 0xb03c, 0x7a0f, 0xf151, 0xd678, 0x6ad9, 0x46fd, 0xb8e8, 0x79a8, 0x871d, 0x90f9, 0x9cf2, 0x2913, 0x0bf8, 0x6420, 0x05fa]),
        y: FieldElement([0x0926, 0x17da, 0x95af, 0xfbd6, 0x196a, 0x6e0d, 0x125e, 0x99f1, 0xaa4c, 0x6fa8, 0x8679, 0x72f4, 0x0028, 0xf926, 0x9eea, 0x3d19]),
        t: FieldElement([0x0f68, 0xba7b, 0xa9d4, 0x3e3f, 0x52c2, 0xdd7a, 0x57ea, 0x5e1a, 0xd934, 0xa56d, 0xbdc2, 0xd1de, 0x8ce1, 0x7404, 0x26b3, 0x3211]),
    },
    // 2^7 * B
    BaseMultiple {
        x: FieldElement([0xdd87, 0xf0cf, 0x495b, 0x5da2, 0x7a40, 0x2623, 0x7aa4, 0x8a83, 0x8bb7, 0x1ad2, 0xeabf, 0x2402, 0x5f08, 0xa97b, 0xbeb1, 0x379d]),
        y: FieldElement([0x86fc, 0x084b, 0xe7ee, 0xfda0, 0x4521, 0x3409, 0x61c1, 0x2332, 0x9bfc, 0x4855, 0x9953, 0x63f7, 0x99d0, 0x01ce, 0x9fe0, 0x28eb]),
        t: FieldElement([0x8ac6, 0x0df0, 0xd008, 0x1462, 0x3cb0, 0x033c, 0xf03b, 0x7356, 0xee5f, 0x9476, 0xe9a7, 0xc26c, 0x62ef, 0x748f, 0x4aba, 0x3e78]),
    },
    // 2^8 * B
    BaseMultiple {
        x: FieldElement([0xa556, 0x0cc2, 0xbcdd, 0x20b8, 0x576d, 0xb561, 0x78fb, 0xd4b5, 0x5449, 0x2690, 0xcbc1, 0xe6e9, 0xecbf, 0x4e1d, 0x07ed, 0x5e7e]),
        y: FieldElement([0xf6c7, 0x566c, 0x2031, 0x0e14, 0xd9a8, 0xc127, 0x3d9a, 0x7d1b, 0x260e, 0x81d3, 0xebaa, 0x6bf5, 0x0279, 0x51f1, 0x755c, 0x0f55]),
        t: FieldElement([0xa27e, 0x2857, 0x65fc, 0x5af3, 0xdfdf, 0x33f2, 0xad86, 0x9e4d, 0xa1ad, 0x094e, 0x4c56, 0x42b4, 0x567a, 0x1ead, 0xae2c, 0x63e8]),
    },
    // 2^9 * B
    BaseMultiple {
        x: FieldElement([0x340a, 0x82cd, 0x333c, 0x5409, 0x61d2, 0x3039, 0xfd9b, 0x21ef, 0xd426, 0xfa70, 0xf9ee, 0x3331, 0x8473, 0xb3d0, 0xbf81, 0x2eec]),
        y: FieldElement([0x93e8, 0x008b, 0xf764, 0xb89c, 0xe074, 0x49e6, 0x4d48, 0x484d, 0x19b6, 0x40a1, 0xd9b7, 0x4132, 0x827c, 0xa137, 0xdc2d, 0x54d2]),
        t: FieldElement([0x053a, 0x2496, 0x22be, 0x3a4d, 0x7eb9, 0x2de3, 0x183b, 0xa9d1, 0x1cce, 0x7446, 0x572a, 0xf13c, 0x83ce, 0x7a96, 0x41df, 0x7529]),
    },
    // 2^10 * B
    BaseMultiple {
        x: FieldElement([0x2b68, 0x5b4a, 0xc7d5, 0x9151, 0xe11d, 0x4b2a, 0x47c4, 0xbcf1, 0xb37a, 0xc8cb, 0x7cb6, 0x90ac, 0xfd05, 0xf9f3, 0x3a52, 0x6b11]),
        y: FieldElement([0xc13d, 0xf327, 0x4359, 0x9095, 0x96c5, 0xf579, 0x95f4, 0x2965, 0x9c06, 0x0551, 0xda18, 0x2eb8, 0x7e79, 0x5969, 0x0171, 0x1aeb]),
        t: FieldElement([0x3fac, 0x4b3a, 0xc3e9, 0x920b, 0xf51a, 0x6690, 0x66d6, 0x70b9, 0xe377, 0xe3b1, 0x8858, 0x55c0, 0xc6da, 0xe6c7, 0x63a6, 0x66cb]),
    },
    // 2^11 * B
    BaseMultiple {
        x: FieldElement([0x17f7, 0xbd13, 0xbcfb, 0xecd2, 0xb345, 0x3115, 0xafe9, 0x8482, 0x283d, 0xfcc6, 0xf511, 0xb541, 0xd38b, 0x7612, 0xe752, 0x3c1a]),
        y: FieldElement([0x364e, 0x0711, 0x15a2, 0x5120, 0x2ac4, 0x62c3, 0x5e8b, 0xa67f, 0xf90f, 0x8545, 0x116c, 0xb786, 0xe57e, 0xf9d7, 0x91c3, 0x051c]),
        t: FieldElement([0x2184, 0xbece, 0xb066, 0x2b47, 0x9621, 0x2bfc, 0xec55, 0x69e1, 0x1650, 0x04aa, 0x3d1f, 0x8862, 0x853c, 0xfdd2, 0x1438, 0x0daa]),
    },
    // 2^12 * B
    BaseMultiple {
        x: FieldElement([0xd6ea, 0x29de, 0x003a, 0x02b9, 0xcb59, 0xc426, 0x99ba, 0x97b1, 0x8e2f, 0x9200, 0x4f26, 0xeb52, 0x1b47, 0x8b89, 0xc024, 0x7d13]),
        y: FieldElement([0x20d5, 0x805b, 0x80a6, 0x9520, 0xe9c3, 0x8e9f, 0x9e87, 0x9e1e, 0xc77a, 0x75cc, 0xa56c, 0x91f1, 0xa81a, 0x2c01, 0x76ab, 0x59a9]),
        t: FieldElement([0x8fa4, 0x6af6, 0xdbe8, 0x9b33, 0x389c, 0x193d, 0x1727, 0xde3c, 0x01bc, 0x367b, 0xbd54, 0x35a3, 0x65b6, 0x937b, 0xf543, 0x6971]),
    },
    // 2^13 * B
    BaseMultiple {
        x: FieldElement([0xc9de, 0x31b1, 0x1610, 0x35aa, 0x6a14, 0xb5d4, 0x8234, 0xd271, 0x5d4a, 0x1f9a, 0x2653, 0xe53c, 0x8d8e, 0x7f33, 0xa9ff, 0x17d5]),
        y: FieldElement([0xaf89, 0xa4f6, 0xd564, 0xe010, 0xad1d, 0x44ef, 0xdabd, 0xac83, 0xa87a, 0x1cf0, 0xf907, 0x43c3, 0x3f6c, 0xd3b7, 0x2287, 0x7302]),
        t: FieldElement([0x1b7c, 0xb68a, 0xfefc, 0xfa2d, 0xbb48, 0xc691, 0xcb3a, 0x662b, 0x52fc, 0xaf13, 0xbaca, 0x87c5, 0x6a58, 0xf631, 0x0cd2, 0x30f9]),
    },
    // 2^14 * B
    BaseMultiple {
        x: FieldElement([0x4b8a, 0x38e7, 0xdabc, 0xb0c2, 0xe185, 0xfe4a, 0x442d, 0xcb84, 0x6b20, 0xbf2d, 0x9c11, 0xbed7, 0x3ed3, 0xbf5f, 0xbc68, 0x07a8]),
        y: FieldElement([0x8901, 0x2228, 0x786a, 0x29aa, 0xc803, 0x9574, 0x3e03, 0xbddc, 0x1307, 0xa2a8, 0x2d20, 0x18b3, 0x4270, 0x7afd, 0xd7c4, 0x7249]),
        t: FieldElement([0x5d03, 0x9279, 0x0a24, 0xc1ce, 0xbd38, 0xb1b6, 0xcae2, 0x2b41, 0xcadc, 0x48af, 0xd886, 0x9ac1, 0x72ec, 0x159b, 0x2c43, 0x1b70]),
    },
    // 2^15 * B
    BaseMultiple {
        x: FieldElement([0xff02, 0x2b32, 0x935c, 0x3254, 0x57e8, 0x1a54, 0x338b, 0x6560, 0x67d3, 0xc1a4, 0xc426, 0x34a4, 0x9b1f, 0xa9a7, 0xd9f4, 0x5b4f]),
        y: FieldElement([0x8d46, 0x33b0, 0x2654, 0x685b, 0xbbdf, 0xecc5, 0xf9c2, 0x5a3c, 0xc137, 0x278e, 0xaa47, 0x5a49, 0xfbf8, 0x0468, 0xd123, 0x40eb]),
        t: FieldElement([0x381f, 0x52b2, 0x7330, 0xc13f, 0x0f25, 0x03c7, 0xf21b, 0x433e, 0xb24e, 0x0efc, 0x68d6, 0xafba, 0x75eb, 0x3267, 0x17a7, 0x3f25]),
    },
    // 2^16 * B
    BaseMultiple {
        x: FieldElement([0xa565, 0x8411, 0x678a, 0x9e9d, 0x44d1, 0x7a68, 0xe134, 0xa39f, 0xcd54, 0xca07, 0x1f79, 0x2f54, 0x7013, 0xee4e, 0xfaa2, 0x5de7]),
        y: FieldElement([0xec36, 0xf854, 0xe4ce, 0xdf85, 0x6ff6, 0x901d, 0xbc08, 0xc0e8, 0x2d92, 0x6b43, 0xa992, 0xab8e, 0x2e0a, 0x1e1c, 0x2364, 0x2c9f]),
        t: FieldElement([0x4aa1, 0x8a3d, 0x2c17, 0x9733, 0x0d55, 0x4a65, 0x4724, 0xb7a9, 0x8c6b, 0x1bfa, 0x7c72, 0xec90, 0x0884, 0x6b64, 0xc131, 0x1e35]),
    },
    // 2^17 * B
    BaseMultiple {
        x: FieldElement([0x4f27, 0x72d0, 0x11b1, 0x2714, 0x9415, 0x8148, 0x747e, 0x32d8, 0xd1d5, 0x2811, 0x6360, 0x3236, 0xb537, 0x1c13, 0x37a0, 0x74e3]),
        y: FieldElement([0x25f1, 0x114e, 0x6796, 0x1ce6, 0xb2c2, 0xe253, 0x85da, 0xb2ee, 0x599f, 0xbaf3, 0xfabd, 0x6ecf, 0xdaf9, 0xb3a4, 0x8f02, 0x0864]),
        t: FieldElement([0x11cf, 0xb4b3, 0x2c87, 0x45d5, 0xcdda, 0x9f03, 0x6f4b, 0xf928, 0x8946, 0x1b7c, 0x28b5, 0xb03b, 0x7b16, 0x864d, 0x6a3f, 0x5007]),
    },
    // 2^18 * B
    BaseMultiple {
        x: FieldElement([0x9434, 0x64f2, 0x4754, 0x0737, 0x8a40, 0xba20, 0x554a, 0x3fd7, 0xba47, 0x2325, 0xb014, 0xe82c, 0xa855, 0xefa6, 0xbd51, 0x6a6f]),
        y: FieldElement([0xd671, 0x7616, 0x06b2, 0x79ea, 0xc4f5, 0x52c3, 0x617e, 0xe1d1, 0x70ad, 0x1d78, 0x1116, 0x7cf8, 0xfc2b, 0x9f55, 0xf852, 0x16f5]),
        t: FieldElement([0x39c2, 0xc0c8, 0x7228, 0x835a, 0x936b, 0x9d76, 0xbf73, 0xe7a8, 0xb96c, 0x66ab, 0x79d2, 0xed65, 0x0b42, 0xa6c9, 0xfe2e, 0x653e]),
    },
    // 2^19 * B
    BaseMultiple {
        x: FieldElement([0x9634, 0xf69a, 0xe0c5, 0x0314, 0x0e24, 0xad4c, 0x9a9e, 0x2370, 0xb296, 0x2ef1, 0xc39d, 0x9b32, 0xa554, 0xde73, 0xb188, 0x243e]),
        y: FieldElement([0xe2f6, 0x1f4c, 0xb25b, 0x82af, 0xcfa5, 0x1081, 0xef04, 0xa2db, 0x24cc, 0x7eb2, 0x7a0b, 0x01eb, 0x52d8, 0x51f4, 0x2989, 0x3779]),
        t: FieldElement([0x3f98, 0x775b, 0x089e, 0x26e1, 0x50af, 0xe5c3, 0xb0e5, 0xa6c4, 0x7825, 0x3bef, 0x70be, 0xab24, 0x104e, 0xcd9a, 0xfa73, 0x47f8]),
    },
    // 2^20 * B
    BaseMultiple {
        x: FieldElement([0xb5ed, 0x8c9a, 0xdd9a, 0xf427, 0x477f, 0x52d9, 0xcda7, 0xa565, 0x2231, 0xa6ed, 0x5b63, 0x4a80, 0x4dad, 0xbfed, 0x49ee, 0x06b3]),
        y: FieldElement([0x64f8, 0x608b, 0xe990, 0x44de, 0xb977, 0x3607, 0xc232, 0xf550, 0xdf65, 0x4c48, 0xaa37, 0xab68, 0x1f9a, 0xff3e, 0x9289, 0x07a0]),
        t: FieldElement([0xd6c6, 0x8a70, 0x6524, 0xc9b3, 0x343b, 0x5de4, 0xdf6b, 0xd1fc, 0x5c77, 0x597d, 0x1e84, 0x502c, 0x9716, 0xe725, 0x3df9, 0x01da]),
    },
    // 2^21 * B
    BaseMultiple {
        x: FieldElement([0x4f7d, 0x199c, 0x4ac0, 0xec31, 0xaaf9, 0xb2eb, 0x9c16, 0x66a3, 0xd15f, 0xedd4, 0x92b8, 0xab1c, 0xeada, 0x57d9, 0x4cdf, 0x482a]),
        y: FieldElement([0xb04b, 0x6e4e, 0x3b11, 0xbd51, 0xfd6a, 0x25e4, 0x5fa5, 0x3f11, 0x9298, 0x1451, 0x5fc6, 0x0b3c, 0xf7a8, 0x81c2, 0xde43, 0x7391]),
        t: FieldElement([0x7588, 0xe154, 0x65b6, 0xf995, 0xeb86, 0x03b0, 0x6b6d, 0xe5a6, 0x19a2, 0x5e6c, 0xcded, 0x21fb, 0x16ae, 0xde9f, 0xba77, 0x63df]),
    },
    // 2^22 * B
    BaseMultiple {
        x: FieldElement([0x8f3c, 0x339f, 0x1f2a, 0x3343, 0x688f, 0x1fff, 0x733d, 0xbf6b, 0xcc68, 0x137d, 0x246c, 0xcc4b, 0x244d, 0xfe0d, 0x86de, 0x3bad]),
        y: FieldElement([0x5179, 0x0181, 0x73dc, 0xe053, 0x9b6e, 0x68ea, 0x5c3f, 0x8414, 0x8d53, 0xc04b, 0x9f9f, 0x2b89, 0xba8c, 0xfa86, 0xcdf2, 0x2de3]),
        t: FieldElement([0x59b3, 0x41df, 0xabe6, 0x7290, 0xd979, 0x0ada, 0x16fe, 0xdbb5, 0x16b8, 0x3722, 0x7b45, 0xfb7a, 0x31a8, 0xa291, 0x75b5, 0x631e]),
    },
    // 2^23 * B
    BaseMultiple {
        x: FieldElement([0xbe54, 0xcb75, 0xb005, 0xb754, 0x26e7, 0x4a86, 0x19fc, 0x27cf, 0xd446, 0x9622, 0x115a, 0xd5e8, 0xed1b, 0xc571, 0xc85d, 0x45af]),
        y: FieldElement([0x7b40, 0x5777, 0x9e49, 0x3980, 0xee23, 0x0b81, 0xcf22, 0x7adb, 0x142f, 0x57b8, 0xa18f, 0x1e39, 0xfc77, 0xa60b, 0x8abf, 0x6c0c]),
        t: FieldElement([0x3a91, 0x232c, 0x28f0, 0xedb8, 0xe570, 0x7788, 0x607e, 0x0aa0, 0x14a5, 0xf415, 0x0b6e, 0x0888, 0x0006, 0xe50e, 0xf7fc, 0x238f]),
    },
    // 2^24 * B
    BaseMultiple {
        x: FieldElement([0x3a77, 0xd8d4, 0xcf27, 0xa1e8, 0x9d72, 0xddca, 0x960d, 0x79da, 0x56ed, 0x1542, 0xc760, 0x6b1c, 0x3026, 0x6af6, 0x6795, 0x0af3]),
        y: FieldElement([0x08c5, 0x2ba4, 0xbd2f, 0x8131, 0xa62a, 0xe4b6, 0x9100, 0x3dda, 0xb0b2, 0xce96, 0xd28a, 0x708d, 0xd3b3, 0x0134, 0x8d90, 0x2110]),
        t: FieldElement([0xc7af, 0xc605, 0x90d2, 0xcbc1, 0x6f44, 0x3b03, 0xe3d1, 0xabdb, 0xe6da, 0xdc82, 0x5dfc, 0x0166, 0xbbd6, 0x8d7d, 0x09bb, 0x4f61]),
    },
    // 2^25 * B
    BaseMultiple {
        x: FieldElement([0x0d33, 0xbae7, 0x074f, 0x8ddf, 0x7dea, 0xc5a0, 0xb1d6, 0xe5b0, 0x1b57, 0xf55b, 0x1345, 0x6414, 0xeb5a, 0xfc5c, 0x0154, 0x2b76]),
        y: FieldElement([0x0c02, 0xafc2, 0x3696, 0x4afe, 0x54e2, 0x6a20, 0xb2eb, 0x629f, 0xced7, 0x3fa2, 0x1120, 0x3734, 0x42e0, 0x6fed, 0x1af9, 0x7dc8]),
        t: FieldElement([0x22e0, 0xf3fb, 0x0c53, 0x2186, 0xd0b0, 0x23ab, 0xcaa6, 0xa367, 0xaf4a, 0x8a6c, 0xf562, 0xe101, 0x0a26, 0x8982, 0x274f, 0x0a00]),
    },
    // 2^26 * B
    BaseMultiple {
        x: FieldElement([0xdb6b, 0x9c5b, 0x92c6, 0x23bc, 0xc5af, 0x75b8, 0x42f8, 0xd6fa, 0x84b6, 0x6394, 0x9398, 0x7848, 0xcd38, 0x18bb, 0xc334, 0x67db]),
        y: FieldElement([0xf396, 0x093a, 0xb056, 0x7c6f, 0x1e51, 0x391b, 0xea48, 0x0cc9, 0xa225, 0xca7a, 0x92e7, 0x59fc, 0xa330, 0x8589, 0x6fdf, 0x3843]),
        t: FieldElement([0x4956, 0xf1a1, 0x7f71, 0xd9cf, 0xc23a, 0xff29, 0xcf08, 0x82f5, 0x3e0d, 0x6671, 0x134c, 0x0828, 0x8170, 0x2a78, 0x57a7, 0x1ce5]),
    },
    // 2^27 * B
    BaseMultiple {
        x: FieldElement([0x8479, 0x1944, 0xe9bd, 0xc454, 0x6ec0, 0xa82a, 0x9ba8, 0xd543, 0x2271, 0xdc5f, 0xfa01, 0xb3df, 0x47b8, 0x0a4b, 0x44a5, 0x29ea]),
        y: FieldElement([0x9005, 0xaf50, 0x5f63, 0x9e9d, 0x9de1, 0x9738, 0x6c1f, 0x30ac, 0xb246, 0x196a, 0x4bd1, 0xbbdb, 0xda8c, 0xab2e, 0x5ac8, 0x6c77]),
        t: FieldElement([0x5326, 0xd7e7, 0x2966, 0xb945, 0xca6b, 0x5e11, 0x7a98, 0x521c, 0x5962, 0x65a8, 0xca0d, 0xf11b, 0xfbe1, 0x6213, 0xec13, 0x6ad4]),
    },
    // 2^28 * B
    BaseMultiple {
        x: FieldElement([0xbe2b, 0xa1af, 0x2f6d, 0xb10b, 0xe38f, 0x38e0, 0x0bcd, 0x1b41, 0x154a, 0xf307, 0xdc6f, 0xe9b8, 0xb2de, 0x40a3, 0xa601, 0x1e45]),
        y: FieldElement([0x0a76, 0x8dda, 0x072c, 0x893f, 0x047d, 0x43ad, 0x6e50, 0x47d2, 0x8acb, 0x85e6, 0x241a, 0xd2f3, 0xfd60, 0x73df, 0x0da4, 0x0e73]),
        t: FieldElement([0x547b, 0xbea1, 0x5527, 0x91af, 0x7949, 0x6bcb, 0x7fc5, 0x8fb7, 0xbd8d, 0xca8e, 0xd49b, 0x3827, 0x878d, 0x3f0b, 0x8f5b, 0x21eb]),
    },
    // 2^29 * B
    BaseMultiple {
        x: FieldElement([0x935d, 0xbec9, 0x90aa, 0x9bcd, 0x73fb, 0xb07e, 0x9864, 0x4457, 0x4142, 0xafb1, 0xc1ea, 0x22c3, 0x60ff, 0xcb46, 0x8161, 0x6170]),
        y: FieldElement([0x820d, 0xfeb9, 0xcd21, 0xf5c4, 0x0c98, 0x724e, 0x87ee, 0xf849, 0x95a1, 0x8fdf, 0xbd2d, 0x0621, 0x157c, 0x12e8, 0x936d, 0x38d6]),
        t: FieldElement([0x6a3e, 0xdfd6, 0xfa90, 0x5300, 0x9940, 0x97f1, 0xef75, 0x3a97, 0x4f43, 0x4265, 0x72d9, 0x40dc, 0xc77e, 0xb241, 0x3a1f, 0x7c65]),
    },
    // 2^30 * B
    BaseMultiple {
        x: FieldElement([0xf791, 0xd951, 0x7def, 0x0142, 0xe913, 0x7fb8, 0x49a6, 0x6417, 0x8021, 0x2c83, 0x4c63, 0x0960, 0x9159, 0x7792, 0x5139, 0x48f4]),
        y: FieldElement([0xd560, 0x8322, 0x2f08, 0x99ff, 0x693e, 0x886d, 0xe7da, 0x525b, 0x3126, 0xe52a, 0xde89, 0x9068, 0x22b6, 0xbd5a, 0x85d3, 0x3153]),
        t: FieldElement([0xc5c5, 0x5b51, 0xb3b2, 0xb29a, 0xefb3, 0xd56f, 0xc1aa, 0x94f1, 0xa965, 0x0ac6, 0xb562, 0xcaac, 0xf79a, 0x3fe9, 0xb096, 0x0f5f]),
    },
    // 2^31 * B
    BaseMultiple {
        x: FieldElement([0xced8, 0xf9dc, 0x4b3c, 0x1da2, 0x2f2c, 0xbe36, 0xfc7a, 0xbccd, 0xf9dc, 0xbd30, 0x05ff, 0xe4c7, 0x178e, 0xf862, 0xa04d, 0x7956]),
        y: FieldElement([0xe782, 0xbaf6, 0x8453, 0xa30a, 0xff34, 0xa33c, 0xa16a, 0xea37, 0xb6dd, 0xb395, 0x1978, 0x1e76, 0x2f55, 0x2e77, 0xc17f, 0x5eea]),
        t: FieldElement([0x3579, 0xdead, 0x5ba7, 0xcb85, 0xc7b2, 0x5f6a, 0xfe18, 0xbfea, 0x3b58, 0x1809, 0x3def, 0x4704, 0x4ef5, 0xe95f, 0x9be1, 0x2874]),
    },
    // 2^32 * B
    BaseMultiple {
        x: FieldElement([0x0cbb, 0x6abc, 0x97a4, 0x9317, 0x6f2d, 0x72de, 0x1c10, 0x2c08, 0x800f, 0x6832, 0xd427, 0xddab, 0x58c5, 0x1361, 0x116d, 0x4d1e]),
        y: FieldElement([0xb91a, 0x10c9, 0x1efb, 0xf44e, 0x4b84, 0x5e8a, 0x4b7b, 0x43e8, 0x8f8c, 0xb500, 0x1354, 0x5cc5, 0x35b6, 0x9d4e, 0x5be4, 0x6d41]),
        t: FieldElement([0xed71, 0x5682, 0x48db, 0x6572, 0x4800, 0xe3dd, 0xc00e, 0x81eb, 0x7885, 0x742e, 0xeef5, 0xffe9, 0xa8c2, 0xff7f, 0x9779, 0x7a97]),
    },
    // 2^33 * B
    BaseMultiple {
        x: FieldElement([0x7d15, 0x4812, 0x1482, 0xcd42, 0xd432, 0xc14b, 0x6172, 0x8c2a, 0xe2ec, 0x24f8, 0x9445, 0xbee3, 0x67dd, 0x77a8, 0xae5a, 0x4b5b]),
        y: FieldElement([0x77cb, 0x209a, 0xb8de, 0xd923, 0x0fa0, 0x7b8c, 0xcba5, 0xb6ae, 0x42ec, 0x0e67, 0xa458, 0x9875, 0x7121, 0xb384, 0x76e0, 0x7394]),
        t: FieldElement([0x63f8, 0x58ec, 0xe04a, 0xfa73, 0xe01c, 0xc437, 0x29a4, 0x10f9, 0x912d, 0x21c9, 0x5f60, 0xf77d, 0x5b8d, 0xb3ae, 0x895a, 0x0e40]),
    },
    // 2^34 * B
    BaseMultiple {
        x: FieldElement([0xfcdf, 0x2869, 0x3f23, 0xf85b, 0x243b, 0xf337, 0xd51d, 0x6b22, 0x98d0, 0x6ca8, 0xffcf, 0xe106, 0xdf13, 0xc1b9, 0xa90c, 0x33bf]),
        y: FieldElement([0x81d9, 0xb2da, 0x824f, 0x439d, 0x0981, 0xd2f1, 0xef01, 0xf4ac, 0x7d2d, 0x0901, 0xfff1, 0x9fa5, 0xcae5, 0x6327, 0x20db, 0x53b1]),
        t: FieldElement([0x5cab, 0x29d9, 0x55c0, 0xae91, 0xedc8, 0x1ae3, 0xe105, 0xb5ba, 0x420c, 0x7b97, 0xf28e, 0x1592, 0x8a7c, 0xfdc6, 0xe663, 0x46da]),
    },
    // 2^35 * B
    BaseMultiple {
        x: FieldElement([0xefc6, 0xc0b9, 0x222b, 0x1e08, 0x7071, 0x35b3, 0x7a9c, 0x9201, 0x9a44, 0xb0f6, 0x9558, 0x9bc1, 0xed02, 0x7c2d, 0x2934, 0x4449]),
        y: FieldElement([0x6245, 0x2e1d, 0x2aff, 0x211c, 0x25a4, 0x0d7b, 0x158c, 0xfc39, 0x7c8f, 0x7da5, 0x251e, 0x45a3, 0xabd6, 0xcbbd, 0x5ec5, 0x7778]),
        t: FieldElement([0xe8a9, 0x8284, 0x690b, 0x5654, 0xe247, 0xa203, 0xd6cd, 0xd895, 0x0a9d, 0x2cb8, 0xeab1, 0x65c4, 0x7ded, 0xabff, 0x62d1, 0x76a1]),
    },
    // 2^36 * B
    BaseMultiple {
        x: FieldElement([0xd3d0, 0xed42, 0x001d, 0x153c, 0x9c2c, 0x8177, 0x73d2, 0x06d1, 0xc4d5, 0x947f, 0x92bb, 0x2c2d, 0x454b, 0xe94b, 0x892a, 0x2b6b]),
        y: FieldElement([0x0cd2, 0xc588, 0x4d48, 0x0dea, 0xc94a, 0x6a52, 0x7961, 0x76e9, 0x85f3, 0x5c52, 0x2c1b, 0xd6e1, 0x0fc4, 0x0e18, 0xf64e, 0x7f1c]),
        t: FieldElement([0xfe58, 0x175f, 0xcfad, 0xfc62, 0x22ed, 0x156b, 0x74b9, 0xe592, 0xecd5, 0xf024, 0x33a9, 0xbacc, 0xe199, 0x1b3e, 0x091f, 0x06e7]),
    },
    // 2^37 * B
    BaseMultiple {
        x: FieldElement([0x04b4, 0x422e, 0x1fcb, 0x112b, 0x7b51, 0xac08, 0x3eaa, 0x529e, 0xb760, 0x61c2, 0x8c57, 0xd584, 0xa618, 0xfc19, 0x75b7, 0x1b91]),
        y: FieldElement([0x68e8, 0x44ca, 0x38c8, 0xcc38, 0x0a53, 0x3532, 0x52cc, 0x0ecb, 0xc5f7, 0xece7, 0x853d, 0x58cc, 0x17e2, 0xff47, 0xa59f, 0x1730]),
        t: FieldElement([0x7027, 0xf660, 0xa861, 0x01b4, 0xf6c1, 0x79c0, 0xeabd, 0x689a, 0x5f27, 0x6f82, 0xac2e, 0xd078, 0xff46, 0xea74, 0x2856, 0x49e0]),
    },
    // 2^38 * B
    BaseMultiple {
        x: FieldElement([0xee87, 0x56a6, 0xc29e, 0x569a, 0x4224, 0x4d85, 0x3198, 0x601e, 0x874d, 0x0485, 0x46ae, 0xf912, 0x7f8e, 0x7fe4, 0x1cf6, 0x0137]),
        y: FieldElement([0x4c73, 0xc5b6, 0xe9c4, 0x856c, 0x4a48, 0xac5a, 0x1fd9, 0xf843, 0x5b62, 0x98ee, 0x332a, 0x798e, 0x61ce, 0x3506, 0xd7d8, 0x71ca]),
        t: FieldElement([0x8848, 0x5d24, 0x8a8e, 0x07de, 0xafcd, 0x1ee1, 0x44b9, 0x30dc, 0xe9ff, 0x95e4, 0x599e, 0xf3d1, 0xd74e, 0x0ec0, 0xb6f6, 0x3297]),
    },
    // 2^39 * B
    BaseMultiple {
        x: FieldElement([0xd372, 0xa6ae, 0x8fca, 0xcccd, 0x8e78, 0x4d19, 0xd2a7, 0xe927, 0x3ca4, 0x5b16, 0x8084, 0xd0f9, 0x6acc, 0xca1e, 0x671e, 0x63bd]),
        y: FieldElement([0x6e7b, 0xd22a, 0x4887, 0xa1ff, 0xe9ca, 0x8515, 0xdbdc, 0x392c, 0x9112, 0x20a9, 0x4faa, 0xf429, 0x7a15, 0xf5d2, 0xcc32, 0x0460]),
        t: FieldElement([0xcbba, 0xd5ed, 0xc880, 0xc30d, 0x8965, 0xca63, 0x2cf7, 0x7115, 0xb2cb, 0xe878, 0xa2f3, 0xb4ec, 0x55bb, 0xc852, 0x4ffc, 0x5dfe]),
    },
    // 2^40 * B
    BaseMultiple {
        x: FieldElement([0x10e5, 0x3b47, 0x90fa, 0x30fc, 0xeab5, 0x566f, 0xfb8f, 0xa70e, 0xc83b, 0xffb2, 0x7a02, 0x9433, 0x2a93, 0xe003, 0x3a96, 0x0f6c]),
        y: FieldElement([0x635a, 0xe167, 0x479b, 0x9f78, 0x7938, 0x97ac, 0x1d66, 0x515e, 0x24ee, 0xe842, 0x4b58, 0x038a, 0x8675, 0x8637, 0x97e2, 0x3d4e]),
        t: FieldElement([0xff38, 0xe1da, 0xe485, 0x4484, 0x3001, 0x3d3a, 0x5da9, 0x1dbc, 0x2353, 0xbd47, 0x20cd, 0x2167, 0x5086, 0x7341, 0xebb1, 0x28b2]),
    },
    // 2^41 * B
    BaseMultiple {
        x: FieldElement([0xb440, 0xe6ab, 0x9fad, 0x6946, 0xb34a, 0xaa8e, 0x9cea, 0x208a, 0x5d16, 0x138c, 0xf6bd, 0xc51d, 0xbd24, 0x2a90, 0xc71c, 0x3b13]),
        y: FieldElement([0xdc54, 0x0d16, 0xbe18, 0x6435, 0x5261, 0x8002, 0x05af, 0xa6f7, 0xd342, 0x2e8f, 0x2679, 0xbba8, 0x17b2, 0xb248, 0x0a7a, 0x1489]),
        t: FieldElement([0x208a, 0x62e7, 0xba75, 0x7914, 0xf238, 0xc848, 0x3065, 0xce06, 0x027b, 0xd90e, 0x00ff, 0xbe74, 0x2dde, 0x03ce, 0xd8bf, 0x5124]),
    },
    // 2^42 * B
    BaseMultiple {
        x: FieldElement([0xa820, 0xe388, 0xc091, 0xbb6e, 0x278a, 0x5182, 0xb283, 0xa928, 0xeb83, 0xa9a6, 0x174d, 0x2259, 0x0054, 0x4550, 0x48cb, 0x184b]),
        y: FieldElement([0x7c33, 0x26e7, 0x4dba, 0xfe32, 0xf453, 0x83fa, 0xa5e3, 0x6679, 0xef73, 0x2380, 0xc268, 0xdd60, 0x33a9, 0x03dc, 0xe07a, 0x3ee0]),
        t: FieldElement([0x1c87, 0x85fb, 0x4e3d, 0xb9e8, 0x6695, 0x7e67, 0x2e40, 0x0685, 0x0666, 0x947b, 0x7486, 0x1816, 0x5d7f, 0xd1ba, 0x3c80, 0x41cf]),
    },
    // 2^43 * B
    BaseMultiple {
        x: FieldElement([0x5c34, 0xfb13, 0xe3c0, 0x2b78, 0x5854, 0x9b22, 0x8176, 0x937f, 0x259c, 0xd23c, 0x96e9, 0x2621, 0xf508, 0x95ed, 0xae11, 0x5a04]),
        y: FieldElement([0xe8b9, 0x12c5, 0x1f97, 0xfe83, 0x943e, 0xd499, 0xf92d, 0x5952, 0x825c, 0xf0a6, 0x7e75, 0xece8, 0xaccc, 0x2118, 0x6709, 0x6766]),
        t: FieldElement([0x76b1, 0x60af, 0x2d38, 0x62f4, 0x20fb, 0xc165, 0x3d88, 0x89cd, 0x926b, 0x1a6a, 0x2efa, 0x0d79, 0xf8a4, 0xc974, 0x4137, 0x3c71]),
    },
    // 2^44 * B
    BaseMultiple {
        x: FieldElement([0xa83e, 0xc238, 0x5657, 0x9a42, 0xe2b1, 0x45f8, 0x11aa, 0x5f48, 0xc417, 0x2754, 0x5ddc, 0xddaa, 0xbc41, 0x81df, 0x53b9, 0x52ee]),
        y: FieldElement([0xf1c3, 0x6da7, 0x5fb3, 0x6f92, 0x91cc, 0x95b8, 0xdf05, 0x643c, 0x3957, 0x5161, 0x8cad, 0x7b38, 0xdec8, 0x3400, 0xa1be, 0x7eb0]),
        t: FieldElement([0xd5b7, 0x0590, 0xd748, 0x14b8, 0xac16, 0x1583, 0x9dde, 0xeaae, 0xc74c, 0x11b2, 0xb8df, 0x3196, 0xfe83, 0x0d66, 0x622c, 0x1047]),
    },
    // 2^45 * B
    BaseMultiple {
        x: FieldElement([0x2425, 0x8a1d, 0x2067, 0x42ee, 0x38eb, 0x0bed, 0xcd8b, 0x9d46, 0x6b5e, 0x241e, 0x129d, 0x1a05, 0x05cc, 0x924e, 0xe138, 0x501f]),
        y: FieldElement([0xee4e, 0x911c, 0x11e6, 0x8ebd, 0x1a55, 0x7518, 0xaf66, 0x7b4d, 0xae0f, 0x856d, 0x82ca, 0x2158, 0x189c, 0xede0, 0x22ec, 0x2f80]),
        t: FieldElement([0xb103, 0xb2ad, 0xdeb9, 0x9468, 0x0029, 0x913f, 0x34bd, 0x42dc, 0x2ba5, 0xaebe, 0x9b15, 0xe638, 0x57c7, 0x2212, 0x483e, 0x73ab]),
    },
    // 2^46 * B
    BaseMultiple {
        x: FieldElement([0x3b68, 0x390a, 0x6a1d, 0x5715, 0xf0fc, 0x5463, 0x39db, 0xe8db, 0x645c, 0xa0ff, 0x4f09, 0xb73b, 0x6032, 0x9499, 0x94fd, 0x2d82]),
        y: FieldElement([0xf624, 0x445a, 0x55f1, 0xdb2c, 0x7cea, 0x7c84, 0xac01, 0xfde3, 0x27c9, 0x5ac1, 0xdeb9, 0x5a4f, 0xdd90, 0x67c6, 0x6faa, 0x3a8a]),
        t: FieldElement([0xb626, 0xd433, 0xa179, 0x445d, 0xfefe, 0x269b, 0x9148, 0x1a08, 0x353a, 0x6bc6, 0xf4e8, 0xa460, 0xc555, 0x6c43, 0xe937, 0x7445]),
    },
    // 2^47 * B
    BaseMultiple {
        x: FieldElement([0xda1d, 0x61e4, 0x5003, 0x8ba9, 0x1868, 0xb2ef, 0x841c, 0xa23b, 0x9544, 0x04a3, 0xd63b, 0x0099, 0x76af, 0x6742, 0x7d02, 0x5685]),
        y: FieldElement([0x72ce, 0x290e, 0xb284, 0xd27d, 0xbe45, 0x0657, 0x7fed, 0xedcf, 0xefcd, 0xd619, 0x15bc, 0x6479, 0x18d2, 0x20e3, 0x3a67, 0x0b54]),
        t: FieldElement([0x78c3, 0xafec, 0xfc47, 0x7eac, 0x20c1, 0x0203, 0xb994, 0x0ad6, 0xe8bd, 0x58a0, 0xd4ac, 0x2d98, 0xb13f, 0xa359, 0xc4b0, 0x275e]),
    },
    // 2^48 * B
    BaseMultiple {
        x: FieldElement([0xfd52, 0xc504, 0x99fb, 0xe8e7, 0x8cfb, 0x42e1, 0xef03, 0xd99d, 0x4d9e, 0x80f7, 0x2ecf, 0x9bcc, 0xc945, 0x7a7b, 0x37bc, 0x52a8]),
        y: FieldElement([0x1196, 0x8a41, 0x9147, 0xb6fe, 0x7ada, 0x6354, 0x14d1, 0x0535, 0x8c86, 0x36a9, 0xf23f, 0x5485, 0x924e, 0x85d8, 0x4601, 0x50d6]),
        t: FieldElement([0xb012, 0x4acd, 0x07b7, 0x8da1, 0x4723, 0xd5dd, 0x90b0, 0x511c, 0x9c3d, 0xfa8c, 0xaf7b, 0x3a46, 0xff44, 0x7671, 0x65c7, 0x7d19]),
    },
    // 2^49 * B
    BaseMultiple {
        x: FieldElement([0xcd53, 0x86f3, 0xe640, 0x4239, 0xd695, 0x45cb, 0x201a, 0x45c8, 0x324b, 0x0469, 0xafb1, 0x4620, 0x6bc7, 0x5b23, 0xee69, 0x3f30]),
        y: FieldElement([0x8370, 0xc047, 0x55db, 0xa808, 0x187b, 0xf56d, 0x5a04, 0x0c20, 0x8c4a, 0xae60, 0x0fae, 0x5564, 0x2e55, 0x1dd5, 0x3153, 0x4142]),
        t: FieldElement([0x058f, 0x7391, 0x6461, 0x03e7, 0xa477, 0x62a1, 0x5f02, 0x30c5, 0x5ddc, 0x2735, 0x48d4, 0x0b8b, 0x2e4e, 0xe791, 0x708f, 0x68a3]),
    },
    // 2^50 * B
    BaseMultiple {
        x: FieldElement([0xe6e4, 0x306d, 0x307d, 0xc235, 0x8778, 0xfcf9, 0x5a6b, 0xb7c3, 0xd865, 0xc72e, 0x0ca5, 0xdcc6, 0xaa12, 0x4fd6, 0x38c5, 0x0ebc]),
        y: FieldElement([0x3ce2, 0x8676, 0xf238, 0x2c7b, 0x7816, 0xf58d, 0x15a4, 0xdbda, 0x8526, 0x56a0, 0x1ddd, 0xb3e3, 0x40fd, 0xf2ef, 0xa1d9, 0x04b3]),
        t: FieldElement([0xe54b, 0x721f, 0xbffe, 0xe8a2, 0x6a2e, 0xc508, 0x38bd, 0xffc3, 0x4787, 0x88ea, 0xe9de, 0xf9d4, 0xec3e, 0x6fa0, 0x2a85, 0x6aea]),
    },
    // 2^51 * B
    BaseMultiple {
        x: FieldElement([0x49db, 0xe60e, 0x1058, 0x527a, 0xb5da, 0x377d, 0x3e6a, 0x78a1, 0xc7ce, 0x241c, 0xdb23, 0xfb7d, 0x8d8c, 0x30dc, 0x6967, 0x3b75]),
        y: FieldElement([0xeaa9, 0x166d, 0x6016, 0x60f4, 0x1987, 0x8c44, 0x8b4a, 0xfb3e, 0x0016, 0x5400, 0x9ea6, 0xef9f, 0xd9cf, 0x4cd2, 0x3174, 0x34d0]),
        t: FieldElement([0x179b, 0x4758, 0x4625, 0xb9c9, 0xb5b7, 0x98f2, 0x97ab, 0x3a6b, 0xd3ca, 0xbc16, 0x4984, 0x2707, 0x45f2, 0xfb39, 0x3c13, 0x0e84]),
    },
    // 2^52 * B
    BaseMultiple {
        x: FieldElement([0xeba4, 0xa404, 0x8f8c, 0x2771, 0x8595, 0x555d, 0xb14b, 0x2626, 0xaec8, 0x7d6a, 0x21a2, 0xceca, 0xab38, 0xd00f, 0x2bd5, 0x006b]),
        y: FieldElement([0x67e5, 0xf10c, 0x9a3a, 0x09ea, 0xef39, 0x30d1, 0x33bc, 0xb1ba, 0xc56a, 0x0827, 0x547f, 0x3d80, 0xf6ab, 0x7a15, 0x40c2, 0x7273]),
        t: FieldElement([0xc1c2, 0xb7ae, 0xbc5f, 0xf120, 0xbe0d, 0xa2ea, 0x4d8e, 0x981b, 0x3918, 0x5bfd, 0x25d4, 0x4afa, 0x8930, 0x0587, 0x8589, 0x5369]),
    },
    // 2^53 * B
    BaseMultiple {
        x: FieldElement([0x2bd8, 0x165b, 0x20ea, 0xd3f1, 0x8f68, 0x5bae, 0xa9d0, 0x191a, 0x36a8, 0x2bfb, 0x8857, 0x907d, 0xa6d5, 0xdcf3, 0x8938, 0x1f4e]),
        y: FieldElement([0x19cc, 0x9bda, 0x433b, 0x2148, 0x232e, 0x3d4d, 0xf8ae, 0xfc8c, 0xa6dd, 0x3774, 0xca65, 0x1aee, 0x8e19, 0x649f, 0x0c6f, 0x5a8b]),
        t: FieldElement([0xa667, 0x2eac, 0xe161, 0xae64, 0x64a5, 0x2a90, 0x9a1e, 0xab83, 0xe5f4, 0x3e46, 0x8e22, 0xc3fc, 0x9a19, 0x86be, 0xda4c, 0x4ebc]),
    },
    // 2^54 * B
    BaseMultiple {
        x: FieldElement([0xb925, 0xf0c2, 0xb872, 0x1615, 0x8dcc, 0x6f3c, 0xed25, 0x46f4, 0x0c2e, 0x0f60, 0x84e2, 0x5534, 0x5989, 0x1b34, 0x8df5, 0x08fe]),
        y: FieldElement([0xabf8, 0xbc93, 0xba44, 0x751b, 0x494b, 0xd06f, 0x2e54, 0xba63, 0xeab5, 0x32ed, 0xc914, 0xd894, 0xcec5, 0x10f4, 0xe068, 0x2738]),
        t: FieldElement([0xed45, 0x372a, 0xb23d, 0xbd2d, 0x0d84, 0xae3b, 0x8e12, 0x211c, 0xe599, 0x5acf, 0x35c7, 0xbbe3, 0xda9d, 0xca26, 0x0257, 0x67c9]),
    },
    // 2^55 * B
    BaseMultiple {
        x: FieldElement([0x1c74, 0x9b14, 0x64d4, 0x7161, 0xb65a, 0x3321, 0xf74f, 0xba8e, 0x48a5, 0xc79a, 0x9afa, 0xb4f0, 0xad62, 0x5ef2, 0x03cc, 0x1a24]),
        y: FieldElement([0x76f5, 0xe4fd, 0xb9af, 0x5903, 0x63ce, 0x3bd2, 0xcd1f, 0x0c21, 0x44ad, 0x97a5, 0x80ac, 0x0211, 0x0c9b, 0x8be5, 0xfbcd, 0x7779]),
        t: FieldElement([0x2205, 0x7b47, 0x0e15, 0xc4f4, 0x6580, 0x9877, 0x68e5, 0xe7cd, 0xc85f, 0x2afc, 0xb4ef, 0x762c, 0x95b2, 0xd6cb, 0x62c2, 0x0ffb]),
    },
    // 2^56 * B
    BaseMultiple {
        x: FieldElement([0x0de4, 0xbdf4, 0x31ee, 0xed10, 0x12cb, 0xad86, 0x2fd4, 0x3790, 0xc332, 0x730b, 0x97ec, 0xa485, 0x1c01, 0x3576, 0x75fe, 0x71dd]),
        y: FieldElement([0xa411, 0x9f88, 0x533e, 0x3b69, 0xe01b, 0xbaf7, 0xad9b, 0x814e, 0xb55f, 0xae5c, 0x67be, 0x3786, 0x8e34, 0x3207, 0x4a45, 0x3967]),
        t: FieldElement([0x034f, 0x6287, 0x4f03, 0xa446, 0xba04, 0xd1f3, 0x64dd, 0x54b4, 0x66f1, 0x45aa, 0x19df, 0x2a39, 0x290c, 0x7164, 0x0459, 0x54b7]),
    },
    // 2^57 * B
    BaseMultiple {
        x: FieldElement([0x7090, 0x2058, 0x1e03, 0xb267, 0x9bc8, 0xc558, 0xebb1, 0x4a2d, 0x82de, 0xf28c, 0x14d2, 0x70b8, 0x4e61, 0xd673, 0x6b0b, 0x300d]),
        y: FieldElement([0xfc81, 0x5c55, 0xa7bf, 0xbdc4, 0xf0e2, 0x8f4b, 0x7de9, 0xfa99, 0xabd3, 0xc7bc, 0x2b83, 0x7f04, 0x190c, 0x0343, 0x073d, 0x40ca]),
        t: FieldElement([0x29f6, 0xf2aa, 0x5c14, 0xc5a4, 0xb2e8, 0xa217, 0xe94d, 0x554c, 0x023a, 0x6258, 0xc1cf, 0xcd97, 0xa20f, 0xbdde, 0xa9c3, 0x19c5]),
    },
    // 2^58 * B
    BaseMultiple {
        x: FieldElement([0xc8f9, 0x8cbe, 0x8116, 0x9639, 0x17f6, 0xc858, 0x5830, 0xc2fb, 0x4503, 0x52d2, 0xe076, 0x266a, 0x5c28, 0x5988, 0x5a6a, 0x4254]),
        y: FieldElement([0xb507, 0x2c2e, 0x1567, 0xfb9b, 0x6983, 0x0f1e, 0xd6da, 0xb129, 0xe060, 0xbab2, 0xa269, 0xbd9e, 0xe0bd, 0xbd1c, 0x06cd, 0x7064]),
        t: FieldElement([0xc03a, 0xd5e9, 0xf77c, 0x9bce, 0x9607, 0xbf5e, 0xfc57, 0x89cb, 0x2563, 0xc6ff, 0x07c0, 0xb7c9, 0xd3a6, 0x5de8, 0x533a, 0x0a2d]),
    },
    // 2^59 * B
    BaseMultiple {
        x: FieldElement([0x3a02, 0x4170, 0x11e4, 0x2357, 0xe6ac, 0x54fc, 0xcd7e, 0x22d7, 0x76cb, 0x209f, 0xa0ce, 0x7673, 0x3b51, 0xf8a4, 0x62e3, 0x6c12]),
        y: FieldElement([0x007f, 0x269c, 0x6f0d, 0x7f48, 0x013a, 0xc5ed, 0xb096, 0x4f1f, 0x02a8, 0x2762, 0x508a, 0x9a8d, 0x528b, 0x1e0f, 0x41cf, 0x1938]),
        t: FieldElement([0x1909, 0x9bbc, 0x299d, 0xfb39, 0x2395, 0xb14e, 0x5b38, 0xca0a, 0x1fd9, 0xcccb, 0xa750, 0xc945, 0x80a2, 0xf877, 0x01a6, 0x6774]),
    },
    // 2^60 * B
    BaseMultiple {
        x: FieldElement([0x6cf5, 0x2fd4, 0x690f, 0x870f, 0x613f, 0x1e65, 0x3435, 0xba85, 0x3002, 0x25ac, 0xe23d, 0xf162, 0xe9cc, 0xc21b, 0x6aef, 0x5742]),
        y: FieldElement([0x1f34, 0xac2e, 0xc7d1, 0x5204, 0x6632, 0x33b2, 0x2173, 0x5434, 0x71f7, 0x06ed, 0xffb0, 0x59a6, 0x8a6f, 0xfb4e, 0xb002, 0x6b45]),
        t: FieldElement([0x2398, 0x1fba, 0x9c6f, 0xfafe, 0xe124, 0x9e8f, 0x513e, 0xe7f6, 0x166f, 0x4306, 0xa077, 0x10d6, 0x1685, 0x67d5, 0x66db, 0x15d3]),
    },
    // 2^61 * B
    BaseMultiple {
        x: FieldElement([0x48f5, 0x030b, 0x22c5, 0x807d, 0x5308, 0x32fe, 0xa1b1, 0x748a, 0xbd6f, 0x853f, 0xcff4, 0x60f5, 0x41af, 0x3e7e, 0xa346, 0x205a]),
        y: FieldElement([0x35aa, 0x4487, 0x6663, 0xf897, 0x556e, 0x040c, 0x353e, 0xbf50, 0x6993, 0x8bd2, 0x5505, 0xbe99, 0x53e2, 0xec61, 0x08e8, 0x320b]),
        t: FieldElement([0x45af, 0x0feb, 0x5725, 0xe028, 0xad87, 0xb3ea, 0x5e83, 0x9bb9, 0x4922, 0x46c6, 0x035f, 0x5373, 0x9a58, 0xf8f5, 0xceb6, 0x232d]),
    },
    // 2^62 * B
    BaseMultiple {
        x: FieldElement([0xea37, 0x65fe, 0x253b, 0xe1e8, 0xc5c2, 0xa402, 0x98be, 0x2b0a, 0xc161, 0xe29b, 0x92d5, 0x9ee6, 0x1f7d, 0x43ca, 0x8b88, 0x592c]),
        y: FieldElement([0xb5e0, 0x1d00, 0x6f2a, 0x79af, 0x2f86, 0x5aa6, 0xd193, 0xaefe, 0xee3a, 0x7cdb, 0xbe61, 0x017c, 0xfef9, 0xdc52, 0x52d8, 0x42a3]),
        t: FieldElement([0xcb17, 0xa786, 0xd561, 0xce95, 0x8476, 0xbf4d, 0x976c, 0x8826, 0x3be5, 0xd37e, 0x17e6, 0x0904, 0x27c1, 0xd7ed, 0x78b2, 0x18be]),
    },
    // 2^63 * B
    BaseMultiple {
        x: FieldElement([0xaf22, 0x3713, 0x37bd, 0xac71, 0x4604, 0xac63, 0x77a4, 0x25ed, 0xe038, 0xa815, 0x0064, 0xce0d, 0x0151, 0xbca9, 0x030f, 0x041c]),
        y: FieldElement([0xf989, 0x0780, 0x3fcf, 0xe9b3, 0x45e7, 0x3d44, 0x7c2a, 0xe4e9, 0x5c16, 0x655e, 0xc71c, 0xc67d, 0xfb7a, 0xee43, 0x7625, 0x7246]),
        t: FieldElement([0x2cee, 0x490c, 0x9e15, 0x9214, 0xf098, 0xe1f5, 0x59ab, 0x35f8, 0x3524, 0xbde0, 0x0817, 0xa92f, 0x80b9, 0x9ca2, 0x1b88, 0x0c26]),
    },
    // 2^64 * B
    BaseMultiple {
        x: FieldElement([0xa202, 0xf4ed, 0x6b8f, 0x3e0b, 0x35eb, 0xd51a, 0xdb7e, 0x0078, 0x8a96, 0xb4a0, 0x60cf, 0xd44b, 0xf9d5, 0xbf2d, 0xbd88, 0x6222]),
        y: FieldElement([0x5313, 0x82e4, 0xfa57, 0x8f1e, 0x2b06, 0xba90, 0xb608, 0x5410, 0x7c4f, 0x261b, 0xdaed, 0xdd6b, 0xd025, 0xea4e, 0xbb42, 0x0325]),
        t: FieldElement([0x0859, 0xb674, 0x92e9, 0x2dfd, 0xbf86, 0x9cc4, 0xbe0e, 0x3b0a, 0x4560, 0x4009, 0x80e6, 0xc799, 0xae0a, 0xc7d3, 0x09e2, 0x628b]),
    },
    // 2^65 * B
    BaseMultiple {
        x: FieldElement([0xa597, 0x8bdb, 0xaa2d, 0x1142, 0xf209, 0xbb93, 0x06d9, 0x4e84, 0xa811, 0x25a0, 0xa62b, 0xae5f, 0xb4c4, 0xc84c, 0xc7ab, 0x023b]),
        y: FieldElement([0xc9ee, 0x0f29, 0x11df, 0xed85, 0x0dce, 0x2c62, 0x4b8f, 0x04f9, 0x06e9, 0x1d72, 0x2037, 0xc950, 0xeb14, 0x39ec, 0x97a7, 0x4d2b]),
        t: FieldElement([0x539a, 0x2c14, 0x20ab, 0x30fb, 0x780b, 0xbd80, 0xb489, 0xcd62, 0xbb73, 0x8d6d, 0x1a08, 0x7965, 0x6848, 0xd7a4, 0x4dbd, 0x2be2]),
    },
    // 2^66 * B
    BaseMultiple {
        x: FieldElement([0xd169, 0xbd39, 0x33fb, 0xc4be, 0x5cf0, 0xf0ef, 0x6856, 0x97fc, 0xc847, 0xb672, 0xa453, 0x980a, 0xb4a5, 0x7137, 0x66cf, 0x6d50]),
        y: FieldElement([0xa417, 0x5219, 0x4711, 0x5cb3, 0xa95b, 0x222e, 0x00b4, 0xf952, 0x1857, 0xbeb8, 0xe35a, 0x83ab, 0x87c8, 0x2a0a, 0x8cd8, 0x54bb]),
        t: FieldElement([0x7c70, 0x68ab, 0xead8, 0x38c8, 0x94a2, 0xa8cf, 0x02db, 0x0a95, 0x6f1f, 0x2a8e, 0x407e, 0x1c9e, 0xfe66, 0x30e7, 0x42e1, 0x6091]),
    },
    // 2^67 * B
    BaseMultiple {
        x: FieldElement([0x62a9, 0x8593, 0xe8be, 0x4a73, 0xb00e, 0x2db5, 0x5094, 0xd3aa, 0xeab2, 0x629d, 0x3b76, 0x3407, 0x2d4e, 0xc870, 0x159a, 0x6b66]),
        y: FieldElement([0x96c5, 0xc8ca, 0x1a22, 0x5fee, 0x31e7, 0x2260, 0x0883, 0xce63, 0x32b9, 0x5844, 0x3a5d, 0xe49b, 0xd504, 0x38ef, 0x4bef, 0x19dd]),
        t: FieldElement([0xfdc3, 0xe7c4, 0x0356, 0xa350, 0xfcb3, 0x674e, 0x9bf6, 0xbf3c, 0x489a, 0x108c, 0x4aa0, 0x4e13, 0x31cd, 0xe0dc, 0xbacc, 0x667f]),
    },
    // 2^68 * B
    BaseMultiple {
        x: FieldElement([0xa226, 0x0250, 0x7224, 0xf0f1, 0x2d4e, 0xd593, 0xe708, 0x38ae, 0x18f7, 0x32a5, 0xc234, 0xa6f0, 0xb9ec, 0x7b61, 0x9964, 0x71ac]),
        y: FieldElement([0xcf25, 0x5574, 0xaa1b, 0x38a9, 0x4041, 0x95d5, 0xab95, 0x5e1c, 0x41bc, 0x147e, 0xbe30, 0x8913, 0xe5f4, 0x28eb, 0xc2c0, 0x3a96]),
        t: FieldElement([0xa485, 0x6ba4, 0x02b7, 0xcbc7, 0x9a5e, 0x2881, 0x5971, 0xc021, 0x1008, 0x76e2, 0xea99, 0xeb0c, 0x2b37, 0x07a5, 0xc269, 0x433b]),
    },
    // 2^69 * B
    BaseMultiple {
        x: FieldElement([0x772b, 0xec45, 0x7667, 0x4c32, 0xdfb9, 0x3225, 0xcb6b, 0x14e7, 0x4361, 0xbaee, 0x719b, 0xd2ef, 0x6548, 0x1bbb, 0x138a, 0x221b]),
        y: FieldElement([0xad84, 0x180c, 0x5a38, 0xd0ba, 0x5998, 0x37bf, 0x4fb0, 0x6097, 0xb320, 0x979b, 0x08f6, 0xa46c, 0xfbff, 0xfab7, 0xb295, 0x7951]),
        t: FieldElement([0xbd03, 0xfa91, 0x383c, 0xe409, 0x07a4, 0xb004, 0x8434, 0x5d02, 0x3d21, 0xd08f, 0xef22, 0x9a66, 0xd71a, 0x9718, 0xb444, 0x2561]),
    },
    // 2^70 * B
    BaseMultiple {
        x: FieldElement([0x5c28, 0xdb3f, 0x186b, 0x5c3b, 0x04d1, 0xde28, 0x5285, 0xb531, 0xf6bb, 0xeda9, 0x28be, 0xb34f, 0x057e, 0xdb6a, 0x0d95, 0x1c1b]),
        y: FieldElement([0xc5d5, 0x9ac3, 0xd00a, 0x3e31, 0x3607, 0xc08e, 0x628a, 0xcab1, 0x0ed6, 0x9d1e, 0xabef, 0x4d98, 0x6cbb, 0xe005, 0x5de4, 0x57bd]),
        t: FieldElement([0x102d, 0x9965, 0x8c00, 0x7de9, 0x91b2, 0x8ad7, 0x9d16, 0x41c9, 0xa298, 0x11da, 0xd689, 0x02c6, 0x9d72, 0xea86, 0xc1cd, 0x5555]),
    },
    // 2^71 * B
    BaseMultiple {
        x: FieldElement([0x9f47, 0x567c, 0x437c, 0x1c91, 0x4ebb, 0x3e72, 0xab64, 0xa0a0, 0xb4df, 0x87d8, 0xbd3a, 0x48a8, 0xb8c9, 0x2eef, 0x6fad, 0x4f84]),
        y: FieldElement([0x2d2d, 0x1bf0, 0x2a7e, 0xf86c, 0x6aa9, 0xf0e1, 0xa199, 0x9a67, 0x13d4, 0xcaca, 0x27ba, 0xaa92, 0x5da1, 0xde50, 0x40cc, 0x0a26]),
        t: FieldElement([0x5ce3, 0x6ad3, 0xc1c5, 0x5132, 0x17a5, 0x243d, 0x5cc7, 0x821c, 0x62b9, 0xb1e7, 0x28c0, 0xe25c, 0x8214, 0x5c4e, 0xfa99, 0x3b50]),
    },
    // 2^72 * B
    BaseMultiple {
        x: FieldElement([0x3e9f, 0xb2f2, 0xce90, 0x64db, 0x033e, 0x37dd, 0x5436, 0x7670, 0xb524, 0x0369, 0xa0fc, 0x742b, 0x05b2, 0xcc0e, 0x1fd8, 0x1f6a]),
        y: FieldElement([0x5e19, 0x6960, 0x8658, 0x31a0, 0x32bd, 0x2ce9, 0xd25c, 0xba85, 0x6440, 0x74a8, 0x0ef8, 0xb31c, 0x69a9, 0x1ee8, 0x6440, 0x7799]),
        t: FieldElement([0x0345, 0xdb18, 0x3a6d, 0x6b46, 0x805d, 0x3c6d, 0xe7ab, 0x2cff, 0x2b51, 0x3d3b, 0xa8ae, 0x2846, 0xe7bb, 0x53ce, 0x09de, 0x0b00]),
    },
    // 2^73 * B
    BaseMultiple {
        x: FieldElement([0x326c, 0xfd4f, 0x5cbb, 0x8dbb, 0x6664, 0x714a, 0x791f, 0xada3, 0xf98d, 0xecd4, 0x67cf, 0xfa70, 0x4a05, 0x6e0f, 0x87af, 0x6f0a]),
        y: FieldElement([0x36c6, 0x6c6e, 0x248c, 0x6009, 0x26be, 0x4cd2, 0x175e, 0x5fca, 0xcc1d, 0xe887, 0x6a42, 0xcbcb, 0x927d, 0x3505, 0x1381, 0x6b60]),
        t: FieldElement([0xa0c8, 0x18f0, 0xcba8, 0xc51f, 0x9fae, 0xcf2a, 0x2548, 0x4475, 0x66e2, 0x2bbd, 0x7a47, 0x8f2c, 0xf61d, 0x4a57, 0x75c0, 0x277e]),
    },
    // 2^74 * B
    BaseMultiple {
        x: FieldElement([0x0564, 0x847a, 0x134a, 0xf6c3, 0x6eb0, 0x6b9a, 0x6b53, 0xda32, 0x74d9, 0xc475, 0x64ba, 0x3b3d, 0xdd08, 0x4610, 0xc7ef, 0x1f90]),
        y: FieldElement([0x2f7b, 0xce3a, 0xa1c8, 0x3c79, 0x1230, 0x2844, 0xbcf6, 0xfdff, 0xc0f4, 0xb097, 0xc3cc, 0x7a13, 0x9ab9, 0xe416, 0x4ccb, 0x6334]),
        t: FieldElement([0x1f84, 0xa961, 0xc14d, 0xd1b7, 0xc1a8, 0xad3a, 0xe3e9, 0x7c67, 0x1dda, 0xbba8, 0x0da5, 0x315d, 0xc732, 0x3a3c, 0xe9a1, 0x5b58]),
    },
    // 2^75 * B
    BaseMultiple {
        x: FieldElement([0x4e07, 0x2dd3, 0x3309, 0xd20e, 0xbe0d, 0xe73e, 0xaae4, 0x00b7, 0xe88b, 0xaaad, 0x8d7a, 0x2834, 0x81a9, 0xc594, 0x42e7, 0x47ac]),
        y: FieldElement([0x8924, 0x8f7a, 0x9bb5, 0xc2f0, 0x6403, 0x1ed0, 0xa4f5, 0xf3b2, 0xe974, 0x161a, 0xcbfd, 0xea15, 0x10eb, 0x356c, 0xc1d1, 0x28a6]),
        t: FieldElement([0xb427, 0x0c8d, 0x637d, 0x45d4, 0x795c, 0x8861, 0x1643, 0x64aa, 0x7aee, 0x02cc, 0x0bbd, 0x5139, 0xb0b3, 0xf57d, 0x4a27, 0x7561]),
    },
    // 2^76 * B
    BaseMultiple {
        x: FieldElement([0xd5cc, 0xfc39, 0xa4a5, 0x32ad, 0xce15, 0xe819, 0x2b34, 0x601c, 0xfc91, 0xa905, 0xdcb3, 0x2980, 0x20c4, 0x0679, 0xc039, 0x22e2]),
        y: FieldElement([0xa8bb, 0x89e1, 0x5770, 0x5418, 0xf63c, 0x820d, 0x0512, 0x9687, 0x3906, 0xf8e3, 0x95b3, 0xd7e5, 0xbf26, 0x5a09, 0xf994, 0x631c]),
        t: FieldElement([0x1dcd, 0x0c32, 0x69f7, 0x98ed, 0x7df6, 0xd198, 0x3ba7, 0x3b77, 0x2139, 0xd99d, 0x974c, 0xc0ba, 0x0234, 0x3d0f, 0x38a0, 0x2cb2]),
    },
    // 2^77 * B
    BaseMultiple {
        x: FieldElement([0xd53d, 0x649a, 0x3673, 0xd6b1, 0x9886, 0x3f42, 0xf18a, 0xf5c7, 0xa842, 0x529c, 0xdca8, 0x24f9, 0x4a3f, 0xa4a1, 0xe85b, 0x1a62]),
        y: FieldElement([0xbdc5, 0x14c8, 0x0dd5, 0xe1eb, 0xe6a5, 0x1183, 0x0009, 0x551d, 0x5183, 0x757e, 0x8100, 0xcbb9, 0xc5d8, 0xa1e5, 0x17d9, 0x1f6d]),
        t: FieldElement([0x912a, 0xd519, 0x672f, 0x2c80, 0xf2cc, 0xbb8d, 0xcef5, 0xa405, 0xaef2, 0x46ae, 0xd14b, 0xcf69, 0x0110, 0xcd24, 0xc788, 0x65c7]),
    },
    // 2^78 * B
    BaseMultiple {
        x: FieldElement([0xf9ea, 0xe9e4, 0x52e1, 0x513f, 0x0d19, 0xd9dd, 0x939d, 0x8731, 0x0923, 0x83d5, 0x92eb, 0x7609, 0xe36e, 0xc0f8, 0x66a2, 0x36b5]),
        y: FieldElement([0xbb3a, 0xed39, 0x0232, 0x43e7, 0x387a, 0x8414, 0x44e3, 0x5ed2, 0xdd94, 0x8978, 0x4c55, 0x9e73, 0xe4e1, 0x433e, 0x4ad0, 0x1bde]),
        t: FieldElement([0x85f0, 0x6938, 0x692c, 0xfacb, 0x73f7, 0x8d5a, 0xb0de, 0x03b4, 0x1a65, 0x177e, 0x018c, 0x2eea, 0x024f, 0xcd64, 0x28ab, 0x1a82]),
    },
    // 2^79 * B
    BaseMultiple {
        x: FieldElement([0xe7b2, 0xe38f, 0xc5a3, 0x72cb, 0x79ee, 0xf841, 0xeedf, 0xc565, 0x7745, 0x3c27, 0x58bd, 0x75d3, 0x04e2, 0xbb4b, 0xf365, 0x0fc8]),
        y: FieldElement([0x7b24, 0x3493, 0xe2b5, 0x4874, 0xa0cd, 0x920b, 0x6697, 0xf439, 0xe2b0, 0x395d, 0x5b6a, 0x1745, 0x1e78, 0x91db, 0x1c81, 0x16f9]),
        t: FieldElement([0xf8c9, 0x0248, 0xf53e, 0xbbcb, 0xf94b, 0xdf3f, 0xebe4, 0xfe2b, 0xe7d6, 0x6bca, 0x9b40, 0x9af8, 0x99b8, 0x8fc6, 0x2a09, 0x449f]),
    },
    // 2^80 * B
    BaseMultiple {
        x: FieldElement([0x10f4, 0xbe46, 0xd2b7, 0xced1, 0x765e, 0xd7a2, 0xdc03, 0x81e4, 0xf65a, 0xde3c, 0x7aae, 0x219d, 0xa534, 0xa9f6, 0xe273, 0x608d]),
        y: FieldElement([0x44fa, 0xf671, 0xd841, 0x58c6, 0x3713, 0x84eb, 0x960f, 0xdcc7, 0xa9c8, 0x837a, 0x2fb2, 0xb131, 0xd81a, 0x3f98, 0xd011, 0x3b31]),
        t: FieldElement([0x44a8, 0xee1b, 0xceec, 0x92c4, 0x7a31, 0x1dbd, 0xdfab, 0xbb36, 0x13ed, 0xa2b8, 0x147a, 0x005e, 0x3e40, 0x3307, 0x71f6, 0x41a5]),
    },
    // 2^81 * B
    BaseMultiple {
        x: FieldElement([0xd581, 0x1634, 0xa301, 0xea93, 0x9452, 0x93ec, 0x81b7, 0x2d11, 0xf958, 0x0ab5, 0x4faa, 0x2ef6, 0x363f, 0x33bf, 0xe75a, 0x08d1]),
        y: FieldElement([0xcf1a, 0xae42, 0xb5cc, 0x3977, 0x5bc4, 0xd05b, 0x5926, 0xd027, 0x7155, 0x9d12, 0x3d88, 0xea9c, 0x6a41, 0x50f0, 0x9393, 0x47dd]),
        t: FieldElement([0xb6f9, 0x4fbe, 0x34b1, 0x4e6c, 0x9a92, 0xdc8a, 0x1856, 0xfdd4, 0x2c32, 0x5af7, 0x6728, 0x8020, 0x5af8, 0x2cba, 0x53df, 0x3028]),
    },
    // 2^82 * B
    BaseMultiple {
        x: FieldElement([0xc96f, 0x6d51, 0xaa1c, 0xa5f5, 0x3f90, 0xe214, 0x8e6e, 0xfd64, 0xe0ac, 0x224e, 0xc1e5, 0x29bc, 0x6a0a, 0xa19e, 0xcb60, 0x0b2f]),
        y: FieldElement([0x39dc, 0xf332, 0x44a1, 0xc5e9, 0x78c3, 0x95fb, 0x3447, 0x3435, 0x25e8, 0x93de, 0xb4c6, 0x6d76, 0x1386, 0xe9c6, 0xb568, 0x6301]),
        t: FieldElement([0x9506, 0xa915, 0x767b, 0x0849, 0xd3d6, 0xefaf, 0x5fab, 0x7100, 0x2cd9, 0x5685, 0xdcc6, 0xbb25, 0x3ecb, 0xbf6e, 0x3e30, 0x2b76]),
    },
    // 2^83 * B
    BaseMultiple {
        x: FieldElement([0xae27, 0x0dd3, 0x8f4c, 0xea34, 0x3c7d, 0x8ae5, 0x5bcf, 0xd892, 0x1630, 0xa3b4, 0xff75, 0x27eb, 0x5cc8, 0xc26c, 0x6cee, 0x0b21]),
        y: FieldElement([0xbac3, 0x5312, 0xaa2a, 0xad77, 0x7819, 0x8a55, 0x602e, 0xc287, 0x916e, 0x9138, 0x7a3f, 0x24c5, 0x518f, 0xdec5, 0x53b0, 0x5630]),
        t: FieldElement([0x3222, 0xfe7e, 0xb7e7, 0x528e, 0x5948, 0x4cef, 0x8ca8, 0x91b7, 0xf6cb, 0x61fc, 0x1e25, 0xf6c5, 0xc749, 0xb685, 0x5a4f, 0x6975]),
    },
    // 2^84 * B
    BaseMultiple {
        x: FieldElement([0xfe02, 0x1254, 0xca18, 0xa57d, 0x4368, 0x6da3, 0x2a14, 0xa56a, 0x328e, 0x63e7, 0xe34f, 0x44c6, 0xab3e, 0xca63, 0x8617, 0x3f74]),
        y: FieldElement([0x641e, 0x7dc1, 0xdc52, 0x5a13, 0x9ca1, 0xee4e, 0x2899, 0x4cbb, 0xacee, 0x1ba9, 0xa289, 0x3938, 0xc47b, 0x420f, 0x89e6, 0x0fed]),
        t: FieldElement([0xdcae, 0x3527, 0x2b3f, 0xfa2e, 0xdba1, 0x25f9, 0x9b0c, 0xfd9c, 0xe413, 0xbce3, 0x639d, 0x2dc6, 0x02c2, 0xd0a1, 0xd019, 0x22fe]),
    },
    // 2^85 * B
    BaseMultiple {
        x: FieldElement([0x3cf3, 0x808c, 0x1083, 0x378a, 0x9c50, 0xdfb4, 0x8c3f, 0x23f7, 0xd607, 0xa0ff, 0x6c82, 0x3b75, 0xb5e4, 0xe4bb, 0x50e6, 0x08f0]),
        y: FieldElement([0xee62, 0x4875, 0x3392, 0xf4f2, 0x15ad, 0xa17a, 0x4601, 0x32a9, 0x8806, 0x36b6, 0x3547, 0xb4b9, 0x8542, 0xf076, 0x0048, 0x3890]),
        t: FieldElement([0x5cb4, 0x561a, 0xe442, 0xefb1, 0xaa81, 0xa8e1, 0xa03a, 0xf71f, 0xa0f3, 0x3e76, 0xf50d, 0xd559, 0xcd86, 0xd642, 0x8264, 0x30a9]),
    },
    // 2^86 * B
    BaseMultiple {
        x: FieldElement([0x00bd, 0x04b9, 0x357d, 0xebfc, 0x0bd0, 0x3205, 0x7a52, 0x2489, 0x5075, 0x63e1, 0x8202, 0xe78e, 0x0c85, 0x56f2, 0x3744, 0x2583]),
        y: FieldElement([0xa18f, 0xcbce, 0xda60, 0x0212, 0x291e, 0x2a39, 0xb703, 0x77eb, 0xea40, 0x2bc9, 0xd52c, 0x7e7d, 0xc72c, 0xfd5a, 0xc4ff, 0x62d1]),
        t: FieldElement([0x834f, 0x396c, 0x3a7d, 0xf564, 0x2666, 0xaf98, 0x0823, 0x2e0b, 0xa7bb, 0xa394, 0xf723, 0x4bbf, 0x7c80, 0x69c2, 0x0501, 0x18af]),
    },
    // 2^87 * B
    BaseMultiple {
        x: FieldElement([0x881d, 0x5b98, 0xfc4e, 0x2441, 0xe605, 0x2b50, 0x96ae, 0xd951, 0x726b, 0x33b2, 0x9842, 0xbb68, 0x5a10, 0x8c7a, 0x079d, 0x05b4]),
        y: FieldElement([0x612f, 0xd79f, 0x3fa8, 0x8c83, 0x6910, 0xe690, 0xd2cf, 0xa363, 0x54e4, 0xe57e, 0x1369, 0x901c, 0xaa57, 0x53e9, 0x4322, 0x2329]),
        t: FieldElement([0x782a, 0xbf01, 0x2bc0, 0x970f, 0x5ff7, 0x2e00, 0x1230, 0xadbe, 0x3111, 0x30ec, 0x539e, 0x2613, 0x1137, 0xf128, 0xd452, 0x703f]),
    },
    // 2^88 * B
    BaseMultiple {
        x: FieldElement([0x1ce5, 0x0af8, 0x2dfd, 0xf57e, 0x70f5, 0x417d, 0x116b, 0xbefe, 0xd199, 0x2955, 0xbf31, 0x97c0, 0xd56c, 0xcc35, 0x8b5e, 0x69d9]),
        y: FieldElement([0x4e8e, 0x259f, 0x81f8, 0x2d54, 0xd50e, 0x8154, 0xa69b, 0xce92, 0xe94b, 0x248f, 0xca3b, 0x44e0, 0x36ab, 0xfbfe, 0xd487, 0x3e26]),
        t: FieldElement([0xfbbf, 0x6d8a, 0x1d53, 0xe0c5, 0x57f5, 0x7a47, 0x38c3, 0x36a7, 0x9914, 0xdbc7, 0xb598, 0x2211, 0xab2b, 0x8054, 0xc9f5, 0x5854]),
    },
    // 2^89 * B
    BaseMultiple {
        x: FieldElement([0xb6d9, 0x9dd4, 0x6ad4, 0x70af, 0x2c07, 0x9e10, 0x11bd, 0xe4ad, 0x3326, 0x9270, 0x1c78, 0x9f74, 0x6075, 0xf456, 0xa839, 0x62a8]),
        y: FieldElement([0xbf3b, 0x3555, 0x8b61, 0x9744, 0x3ae8, 0xc155, 0x3bc8, 0x95fd, 0x1129, 0x9660, 0xcb1e, 0x9d11, 0x03c2, 0x1b8a, 0xd6c6, 0x3d45]),
        t: FieldElement([0xba1b, 0x1465, 0x08b3, 0xf338, 0xb307, 0x57b5, 0x2a41, 0x540e, 0x7c02, 0xf7e5, 0xf92a, 0x49ee, 0xd5aa, 0x3df0, 0x41a2, 0x145a]),
    },
    // 2^90 * B
    BaseMultiple {
        x: FieldElement([0x0e7e, 0xb250, 0x0dcc, 0xa66b, 0x5b71, 0xed42, 0xafbd, 0xf0ac, 0x12fc, 0x3fa2, 0xda4e, 0x11e8, 0x23f3, 0x04e1, 0x0362, 0x4e1c]),
        y: FieldElement([0xb1c8, 0x6f1b, 0x6173, 0x273d, 0x7d0d, 0x257a, 0x735f, 0x2f0e, 0xf693, 0xd824, 0x904f, 0xa2ac, 0x0a62, 0x61f0, 0x08d9, 0x6a59]),
        t: FieldElement([0x9322, 0xb3bc, 0x8512, 0xb596, 0xd730, 0x3b83, 0x2d06, 0xa33a, 0x7c4f, 0x6019, 0xf01d, 0x1d70, 0xe779, 0xb50f, 0xac2e, 0x4357]),
    },
    // 2^91 * B
    BaseMultiple {
        x: FieldElement([0x2d6f, 0xf855, 0x8e2f, 0x18f0, 0xea3b, 0x26dd, 0xd172, 0xfef5, 0xb8e5, 0xd3e6, 0x4810, 0x4946, 0x9f3a, 0x455e, 0x906b, 0x7fe8]),
        y: FieldElement([0x76d3, 0x3369, 0xb97b, 0x7040, 0xa6ee, 0x6b29, 0xd0dd, 0x8d5d, 0x3ec1, 0xea4a, 0xb137, 0x0203, 0x3503, 0x28f1, 0xff9d, 0x1300]),
        t: FieldElement([0xecde, 0x81ed, 0x8245, 0x2c79, 0x8a96, 0xe03f, 0xc903, 0x8aae, 0xaf85, 0xc159, 0xcc1e, 0x9188, 0x8fb4, 0xbd51, 0x390c, 0x1d90]),
    },
    // 2^92 * B
    BaseMultiple {
        x: FieldElement([0xd622, 0x17b5, 0xbf84, 0xcc12, 0x1423, 0xdf4a, 0x3114, 0xa1bc, 0x6eac, 0xfaab, 0x1157, 0xb353, 0xe627, 0x47f9, 0x4433, 0x1e34]),
        y: FieldElement([0xfc79, 0xb4a6, 0x350b, 0xc920, 0x224d, 0xc484, 0x20a9, 0x89ec, 0xba94, 0x5666, 0xb948, 0x7f87, 0x1eca, 0xed06, 0x55a5, 0x2959]),
        t: FieldElement([0xa1d4, 0xfb54, 0xf84a, 0x1003, 0x73d0, 0x8f3a, 0x1c96, 0x7e3a, 0xc754, 0xcce6, 0xc96b, 0x3a19, 0x2e3c, 0xd53e, 0xf59b, 0x2933]),
    },
    // 2^93 * B
    BaseMultiple {
        x: FieldElement([0xe156, 0xf1f5, 0xabd5, 0x2ba8, 0x89ae, 0xcff3, 0x9f56, 0x4bf2, 0xbc31, 0xa918, 0x5b06, 0xb4be, 0xf861, 0x06b2, 0x819c, 0x4cab]),
        y: FieldElement([0x681f, 0x0176, 0x3816, 0x0f2b, 0x9777, 0x6792, 0x864e, 0x8b6a, 0xe8e5, 0xf70c, 0x3936, 0x33b5, 0xcfe6, 0xbd5e, 0xfb18, 0x1f10]),
        t: FieldElement([0x9f6e, 0xf6e0, 0x341b, 0x8f23, 0x086e, 0x51ab, 0x1d95, 0xb359, 0xd90c, 0x39f9, 0xe42d, 0xb17f, 0x74ef, 0xae66, 0xee02, 0x0164]),
    },
    // 2^94 * B
    BaseMultiple {
        x: FieldElement([0xf083, 0x630d, 0x53ef, 0xb56b, 0xf96b, 0xcf83, 0x04de, 0x9b22, 0x0a2c, 0xa5e0, 0xc7d8, 0xa59c, 0xf6a3, 0xcf6f, 0x6b90, 0x7c68]),
        y: FieldElement([0x1533, 0x7fd7, 0xd51a, 0x5821, 0x18c4, 0xf0a5, 0x73cc, 0xfda8, 0x18fa, 0x03d1, 0x8d91, 0xd252, 0xa4a3, 0xb1d3, 0x1dea, 0x000f]),
        t: FieldElement([0x2b4e, 0x9d8d, 0x0820, 0xf2f3, 0x4d31, 0x591b, 0xc39d, 0xeb43, 0xab4e, 0xc7f2, 0x0e87, 0xe747, 0xc6ae, 0xeb15, 0xa38b, 0x397b]),
    },
    // 2^95 * B
    BaseMultiple {
        x: FieldElement([0x3a2c, 0xade5, 0xddf4, 0xf72d, 0x445c, 0x5bb5, 0xa321, 0x5f89, 0x4596, 0x4dca, 0x21a4, 0x7099, 0xc4da, 0xa0c4, 0xf4e5, 0x0aec]),
        y: FieldElement([0x6807, 0x6521, 0x08e9, 0x0ba0, 0x4a6a, 0xb5ba, 0xaf80, 0x1bd0, 0xf5c5, 0x734b, 0x6050, 0x712d, 0x6169, 0xc00e, 0x4020, 0x1930]),
        t: FieldElement([0x5f38, 0xba96, 0x7341, 0x86f4, 0x6d7b, 0x69fd, 0x4df9, 0x9984, 0xfbf1, 0x388c, 0x46b1, 0x60f0, 0x1b9e, 0x9c67, 0xad60, 0x34d1]),
    },
    // 2^96 * B
    BaseMultiple {
        x: FieldElement([0x75d0, 0x3b57, 0x5ceb, 0x5614, 0xc950, 0xb84f, 0x1eb8, 0xf4a3, 0xf5ab, 0x20a9, 0x9415, 0xda82, 0x1c96, 0x599b, 0xff8c, 0x51f4]),
        y: FieldElement([0x3ac1, 0xd786, 0x06b0, 0x7f84, 0xbd1b, 0x07d4, 0x8078, 0xb12e, 0xeeb4, 0x3852, 0x9aee, 0xf6f9, 0x41f3, 0xd46e, 0x9588, 0x35ac]),
        t: FieldElement([0xc911, 0x08d6, 0x7207, 0x8fdb, 0x74b0, 0x9017, 0x3155, 0x0c80, 0x66ff, 0xb225, 0x4671, 0xfb89, 0xf2ea, 0xda58, 0x2f54, 0x4da0]),
    },
    // 2^97 * B
    BaseMultiple {
        x: FieldElement([0x9741, 0x71bf, 0x9b6a, 0xec72, 0xf8f3, 0xe66b, 0x6c0e, 0xa569, 0x682f, 0xd852, 0x8161, 0x63c0, 0xa63f, 0x133c, 0xe690, 0x568d]),
        y: FieldElement([0x39e8, 0x7730, 0xb123, 0x1bfd, 0x3e3d, 0x4d74, 0xae7f, 0x3a5b, 0x65b4, 0x3a0e, 0xdc43, 0x41dc, 0xe647, 0x92e8, 0x2209, 0x4c48]),
        t: FieldElement([0x98ef, 0x170a, 0xdbc4, 0x006f, 0x19e9, 0x4861, 0x0e02, 0xb426, 0x3267, 0x0c9e, 0xb3b9, 0x877b, 0x73f7, 0xf75e, 0xf6eb, 0x4090]),
    },
    // 2^98 * B
    BaseMultiple {
        x: FieldElement([0x03da, 0x6634, 0x0cc4, 0x6e73, 0x24bc, 0xf9b5, 0x8170, 0xe952, 0x7cf4, 0xdd23, 0xb89f, 0xef46, 0x221d, 0x7d55, 0xc471, 0x3342]),
        y: FieldElement([0x37c5, 0x5b69, 0xc6a8, 0xa49d, 0x61fc, 0x686e, 0xea46, 0x1cd7, 0xd267, 0xfa7d, 0xccf1, 0x8d54, 0x3536, 0x00c9, 0x6cdf, 0x5067]),
        t: FieldElement([0xb8bb, 0xfd50, 0xb47a, 0x923a, 0x0dd3, 0x439a, 0x2837, 0x2d5e, 0x465d, 0x0010, 0x052c, 0x9bc3, 0x4fdc, 0x0b4a, 0x40a1, 0x2d3c]),
    },
    // 2^99 * B
    BaseMultiple {
        x: FieldElement([0x4d9a, 0x2942, 0xa45d, 0x6f6b, 0x8aa8, 0x914d, 0xd27b, 0x36df, 0x01ef, 0xc522, 0x8dcc, 0x58eb, 0xb33d, 0xfc50, 0x978b, 0x3396]),
        y: FieldElement([0x3393, 0xc807, 0xca4a, 0xb1d0, 0xbdab, 0xa7dd, 0xac7c, 0x453e, 0xcccb, 0x9107, 0x35bf, 0xcb9d, 0x127d, 0x113c, 0x1359, 0x5ccf]),
        t: FieldElement([0x0649, 0xb0eb, 0x30ed, 0x788f, 0xb9bf, 0x1740, 0x7b38, 0xa298, 0x0519, 0x4c90, 0x5738, 0xa29c, 0xa4b9, 0x5ed5, 0x84dc, 0x5c6b]),
    },
    // 2^100 * B
    BaseMultiple {
        x: FieldElement([0xb845, 0xd741, 0x07ab, 0x0015, 0xce8e, 0xb2df, 0x5c43, 0xdc01, 0x01f4, 0x9551, 0x5a10, 0x24f6, 0xa024, 0x3a19, 0x2a09, 0x3faa]),
        y: FieldElement([0x8edc, 0xc6eb, 0xddbf, 0x7b11, 0x47e7, 0xcee6, 0xb6e7, 0xe8c5, 0xdc8a, 0x574b, 0x3b15, 0xca66, 0xa389, 0xacfd, 0xe10d, 0x7a1d]),
        t: FieldElement([0xb02b, 0x90fa, 0x8524, 0x1133, 0x2bd2, 0xad85, 0xc4df, 0xe1ab, 0x867d, 0xe665, 0x2ab0, 0x51f8, 0xa076, 0x2ef7, 0x80b6, 0x4d16]),
    },
    // 2^101 * B
    BaseMultiple {
        x: FieldElement([0xe3c5, 0xaee8, 0x2717, 0x64e3, 0x7160, 0x2947, 0x0f02, 0x5d92, 0x9310, 0x0ec8, 0xeda1, 0xa9ba, 0x1c96, 0x76c5, 0xcd30, 0x30f9]),
        y: FieldElement([0xb095, 0x8cbd, 0xa7bc, 0x7e4f, 0x4efd, 0xbf3a, 0x045f, 0x8079, 0x5a2b, 0x4f9f, 0x2168, 0x7119, 0x20c6, 0x4201, 0xdfaa, 0x2cae]),
        t: FieldElement([0xda2b, 0x0093, 0x91e5, 0x443e, 0x2da2, 0xb4be, 0xd538, 0xa28e, 0x1565, 0x5e4c, 0xf2d4, 0x7b70, 0xc3c6, 0x5761, 0x0e79, 0x5393]),
    },
    // 2^102 * B
    BaseMultiple {
        x: FieldElement([0x6e90, 0x4b7e, 0x9371, 0x72c0, 0xebed, 0x2471, 0x2697, 0xfe9c, 0x3ecb, 0x1959, 0x0fa8, 0x7d75, 0x18be, 0x96e6, 0x951e, 0x6070]),
        y: FieldElement([0x6689, 0x1d3e, 0x5f4c, 0xc0fe, 0x4304, 0x44d6, 0xb519, 0xc7ad, 0xdc22, 0x2871, 0xde64, 0x3841, 0x8f27, 0x6b2c, 0xb808, 0x7bb8]),
        t: FieldElement([0x2df1, 0xa24b, 0x3dae, 0xc389, 0x413a, 0x0595, 0x73b5, 0x6ad0, 0xf388, 0xf068, 0x480c, 0x94f8, 0x86b9, 0xa8c0, 0x6bd7, 0x285f]),
    },
    // 2^103 * B
    BaseMultiple {
        x: FieldElement([0x703d, 0x9d27, 0xafd9, 0x27b1, 0xe3af, 0x1e5d, 0x303a, 0x6154, 0xe860, 0x26c3, 0xbc3a, 0xf57e, 0xdd81, 0x0164, 0xeb04, 0x1ec0]),
        y: FieldElement([0x2cda, 0xd1a4, 0xc3a1, 0x6e5c, 0x0732, 0xb81f, 0x190e, 0x999e, 0x3329, 0xae9a, 0xed7a, 0x4268, 0x7c69, 0xb307, 0x2c38, 0x3df6]),
        t: FieldElement([0xf6a4, 0x1e7b, 0x4ae7, 0x9489, 0xd736, 0x85c7, 0xac22, 0xdec2, 0xbdcd, 0xc5be, 0x28b7, 0x2edf, 0xd734, 0x22ee, 0x69fb, 0x7d7d]),
    },
    // 2^104 * B
    BaseMultiple {
        x: FieldElement([0xa90f, 0x01d5, 0x48aa, 0x284f, 0x3266, 0xba1a, 0xea7c, 0x8011, 0x1817, 0x569b, 0x2588, 0x6906, 0x2c12, 0x56ea, 0x4169, 0x1924]),
        y: FieldElement([0x21de, 0xdaf0, 0xfb8a, 0xb8b1, 0xc8cd, 0x826a, 0x7319, 0xc7db, 0x88cf, 0x96eb, 0x6fee, 0x06fb, 0xcdd2, 0x7b7d, 0x2812, 0x0c8e]),
        t: FieldElement([0x1f85, 0x14e4, 0x7c2c, 0xc150, 0x088b, 0x1bc2, 0x6cd2, 0x06af, 0x64ed, 0xdb00, 0xee30, 0xc6ed, 0xdbea, 0x42de, 0xd673, 0x543f]),
    },
    // 2^105 * B
    BaseMultiple {
        x: FieldElement([0x4493, 0xce97, 0xff28, 0x403a, 0xf5c4, 0x9bf6, 0x6bf4, 0x8407, 0x98fb, 0xecd8, 0x038c, 0xec57, 0xed49, 0xb663, 0xffaa, 0x2898]),
        y: FieldElement([0x163d, 0xf335, 0xbc46, 0xf4b3, 0xb6c6, 0xfa4f, 0xa0f4, 0xe613, 0x4557, 0xb993, 0xd6bc, 0xe759, 0x9477, 0xab6c, 0x3b96, 0x094f]),
        t: FieldElement([0x48d2, 0x1dbc, 0x6e0b, 0x7d04, 0x184f, 0x569b, 0x5e4c, 0x1c06, 0x5303, 0xd508, 0xacf9, 0x7154, 0xb7d0, 0x1eee, 0xa8c9, 0x3537]),
    },
    // 2^106 * B
    BaseMultiple {
        x: FieldElement([0xf75a, 0x016b, 0x4f12, 0xc151, 0x8470, 0x4794, 0x01b2, 0x716c, 0xccd7, 0x6617, 0x590f, 0x5d5d, 0x0110, 0x1157, 0xddf5, 0x34e2]),
        y: FieldElement([0xd926, 0x5c1f, 0xac58, 0x038b, 0xc3d2, 0x0f85, 0xc33a, 0x6d7f, 0x868e, 0x52cd, 0x8f74, 0x7755, 0xb717, 0xb78e, 0xea88, 0x1bda]),
        t: FieldElement([0xdfe4, 0xb6a6, 0xfa9c, 0xe9eb, 0x8081, 0x78f9, 0x22de, 0xb3ce, 0xc5c2, 0xbbb7, 0x0e9d, 0x0d22, 0x253a, 0x5ccc, 0xbb0b, 0x1bfb]),
    },
    // 2^107 * B
    BaseMultiple {
        x: FieldElement([0x5cc8, 0xfe16, 0x9fed, 0x5626, 0x4bf6, 0xa79f, 0x850a, 0xa5fe, 0x878c, 0x98dd, 0x4ece, 0x58c3, 0xb255, 0x3d7b, 0x6bd8, 0x4cb5]),
        y: FieldElement([0x3865, 0x15a0, 0xa7fa, 0x8fb4, 0xc4eb, 0x9b86, 0xa530, 0x4d5e, 0x8aea, 0x9f9a, 0xd81a, 0x535b, 0x1914, 0x6325, 0x6fb4, 0x5d1f]),
        t: FieldElement([0x0ad9, 0xd866, 0x9e2e, 0xc4df, 0x2270, 0xb4ed, 0x3fad, 0x2f0d, 0xcb5c, 0x6f0b, 0xd16a, 0x78c2, 0xa4d3, 0x6c10, 0x4ee3, 0x2f55]),
    },
    // 2^108 * B
    BaseMultiple {
        x: FieldElement([0x8fac, 0x1ebc, 0x8b7d, 0x0b5a, 0xaf8d, 0x2e76, 0xe371, 0x6f3b, 0x2f53, 0x903e, 0xd495, 0x1435, 0x8c4f, 0xce3c, 0x1c57, 0x4976]),
        y: FieldElement([0x50a8, 0x61e1, 0x576b, 0xeb35, 0x0b44, 0x6e0c, 0x25f9, 0x7480, 0x8ff2, 0x7a6f, 0x7f3e, 0xf32d, 0x094e, 0x1065, 0x035e, 0x3225]),
        t: FieldElement([0xcda1, 0xd5e7, 0x1bfd, 0x7d27, 0x732c, 0x4705, 0x4548, 0x0217, 0xf72f, 0x9d8e, 0x2d1d, 0x0f42, 0x0c6f, 0x18b0, 0xbcc0, 0x671a]),
    },
    // 2^109 * B
    BaseMultiple {
        x: FieldElement([0x60a9, 0x0fdc, 0xe564, 0xe21d, 0x4f8d, 0x2f79, 0x240e, 0x0002, 0x7705, 0x2543, 0x6a3d, 0xb7c7, 0x04bf, 0x6508, 0x39f4, 0x654b]),
        y: FieldElement([0x1996, 0x6b12, 0xb76a, 0xdce3, 0x9b45, 0xb4db, 0xaea8, 0xa8dc, 0x4414, 0x6265, 0x34ce, 0x849a, 0x1218, 0xf101, 0x7be2, 0x50ce]),
        t: FieldElement([0xd02a, 0xa95b, 0xd8f8, 0x39d5, 0x3c90, 0x4247, 0x9b0b, 0xe40f, 0xde44, 0x386b, 0xfc4b, 0xbc83, 0x7f73, 0x9397, 0x1be6, 0x2f52]),
    },
    // 2^110 * B
    BaseMultiple {
        x: FieldElement([0x7d0f, 0x8c63, 0x5c6e, 0x30de, 0x65df, 0x2efa, 0xa3b0, 0x0525, 0xbd54, 0xba25, 0xae06, 0x8bdf, 0x1bd9, 0x38ea, 0x05b3, 0x0916]),
        y: FieldElement([0x8cc7, 0x64bf, 0xad28, 0xa5f8, 0x6f5a, 0xbac9, 0x7fd5, 0xd6d5, 0x66bd, 0x3d2f, 0x54aa, 0xbaf6, 0x2232, 0x1e9a, 0x0552, 0x1df4]),
        t: FieldElement([0xfac6, 0x92fe, 0x259b, 0x6982, 0xd16c, 0xc81f, 0xbe21, 0x35f5, 0x4b3e, 0x82f5, 0xaf75, 0x8900, 0xf729, 0x74c8, 0xde3b, 0x0e8a]),
    },
    // 2^111 * B
    BaseMultiple {
        x: FieldElement([0x1faa, 0xebbb, 0xe4fe, 0xfc87, 0x2cb1, 0x88b7, 0xc6f4, 0xf5b9, 0x4624, 0xa5f2, 0x8f9f, 0x938a, 0x6970, 0x56d4, 0xfdec, 0x4606]),
        y: FieldElement([0x664e, 0x4ecf, 0xce34, 0xd90c, 0x50a6, 0x5ed6, 0xaf95, 0x58e9, 0xeefa, 0xb89b, 0x0fa5, 0xe035, 0x8243, 0x656d, 0xd9e6, 0x0f00]),
        t: FieldElement([0x8643, 0xa4b6, 0xddfb, 0x19c9, 0x751a, 0xf729, 0x87f4, 0xe7f6, 0x04a7, 0x429e, 0xa69a, 0x926b, 0x909c, 0x720e, 0x2d9a, 0x2ee6]),
    },
    // 2^112 * B
    BaseMultiple {
        x: FieldElement([0x757b, 0xfc3a, 0xd364, 0x7e29, 0x49dd, 0x599a, 0xbf53, 0xa7b4, 0xb352, 0xab05, 0xafc3, 0x1a16, 0x4285, 0xa232, 0xfa86, 0x4339]),
        y: FieldElement([0x4b0e, 0x63a3, 0xfe8a, 0x58a5, 0x13f1, 0x9dbd, 0x7faa, 0x4076, 0x8170, 0x7510, 0xbb99, 0x0bbe, 0xe916, 0x62ba, 0xcc34, 0x6d07]),
        t: FieldElement([0x849d, 0x5e84, 0x0bf1, 0x2918, 0xaa7a, 0x5c32, 0xde39, 0x9155, 0x76e8, 0x5863, 0x5efb, 0x55e0, 0xb0d4, 0x79d0, 0x635e, 0x4dcb]),
    },
    // 2^113 * B
    BaseMultiple {
        x: FieldElement([0x01eb, 0x36c7, 0x4e97, 0xabb6, 0x0d5f, 0xba2c, 0x6467, 0xde55, 0xffbc, 0xeca6, 0xd304, 0x398d, 0x5e56, 0xf8ee, 0x2ee4, 0x6233]),
        y: FieldElement([0xef65, 0x9fb8, 0x4bc8, 0xfda7, 0x4921, 0x929b, 0x8235, 0x0ad6, 0xf29b, 0xf179, 0x2f47, 0x7e6a, 0xcf9f, 0x0218, 0xfb3c, 0x3e1b]),
        t: FieldElement([0x12e8, 0x0daa, 0xd3dc, 0xbf20, 0x5f05, 0xc973, 0xbf9c, 0x714c, 0x43ff, 0x65e3, 0xaa66, 0x42cd, 0x7c84, 0xdcf5, 0x0d91, 0x6b4c]),
    },
    // 2^114 * B
    BaseMultiple {
        x: FieldElement([0x8b2f, 0x40c8, 0xd151, 0x1aac, 0xe40b, 0xa2a9, 0x2142, 0x2f19, 0x977b, 0xf7bf, 0x6d57, 0x3d3f, 0x0f4f, 0xb2e2, 0x0081, 0x7b9e]),
        y: FieldElement([0x858c, 0xc42b, 0xf1fc, 0xe8ab, 0x2279, 0x84c4, 0x3a17, 0x86fa, 0x7da6, 0xf3f9, 0x036f, 0x2057, 0x794d, 0x6ef9, 0x5471, 0x0938]),
        t: FieldElement([0x0f15, 0x7e40, 0xf6b5, 0xf1a6, 0xf89f, 0x791d, 0x38f5, 0x27f3, 0x9c26, 0xf902, 0xf43a, 0x1ea0, 0x2cc6, 0x1d3e, 0xb63b, 0x3b80]),
    },
    // 2^115 * B
    BaseMultiple {
        x: FieldElement([0x2940, 0xa874, 0x5e2f, 0x79f9, 0xf3a4, 0xb93e, 0x33fd, 0xac31, 0x699a, 0x1e88, 0x2177, 0xf32d, 0x5291, 0x1526, 0xa6b2, 0x7ecf]),
        y: FieldElement([0x20c6, 0x6c47, 0x7da4, 0x63cb, 0x5bea, 0xdf03, 0x883e, 0x6d81, 0x07ce, 0x1842, 0x7e60, 0x557b, 0x6afe, 0xdaf3, 0x8b5c, 0x1095]),
        t: FieldElement([0xa6be, 0xb851, 0x4f14, 0xac05, 0xc77f, 0x0fe0, 0x8a20, 0x55e3, 0x2763, 0x82ac, 0xad4c, 0x3de1, 0x2ebb, 0x0745, 0x1b64, 0x4f73]),
    },
    // 2^116 * B
    BaseMultiple {
        x: FieldElement([0x95fb, 0x6392, 0xfc50, 0xf062, 0x5ea4, 0x188c, 0x17c2, 0xb724, 0xc278, 0xe7a9, 0x326a, 0x29d6, 0xaf85, 0x8dcb, 0x1391, 0x6bda]),
        y: FieldElement([0x0a36, 0xb6c2, 0xa54b, 0x075d, 0x4117, 0x5f31, 0x4662, 0x92f8, 0x66f9, 0x7348, 0x97a6, 0x7d0d, 0xee88, 0xb162, 0xa803, 0x2c3f]),
        t: FieldElement([0xfc68, 0x09a8, 0x8cf3, 0xa321, 0x998b, 0x02ea, 0xb626, 0x905d, 0x8634, 0x9a1a, 0x4b26, 0xbc13, 0x0905, 0xc0da, 0x93f4, 0x2417]),
    },
    // 2^117 * B
    BaseMultiple {
        x: FieldElement([0xb14a, 0x8a70, 0xe8a9, 0x7963, 0xe200, 0x1625, 0x4bca, 0xa40f, 0xad66, 0x9f19, 0x6788, 0x8b0c, 0x4ac2, 0x2b5b, 0x956d, 0x19af]),
        y: FieldElement([0x9d8b, 0xccb6, 0xb460, 0x4f72, 0x6917, 0x4a5a, 0x3468, 0xa1ab, 0x3245, 0x833c, 0x7287, 0x5430, 0x6877, 0xfbae, 0x8bb5, 0x5e22]),
        t: FieldElement([0x9da2, 0x83c6, 0x1939, 0x32cc, 0xa72c, 0x3ec5, 0x19c3, 0xda46, 0x70c3, 0xc88e, 0x8fc8, 0x14a7, 0x524b, 0x5438, 0xa16b, 0x5d3f]),
    },
    // 2^118 * B
    BaseMultiple {
        x: FieldElement([0xb9f1, 0x3587, 0xbbc5, 0xcfb9, 0xd6f5, 0xd5cd, 0x7c0c, 0xe60e, 0x3490, 0x51fb, 0x1e42, 0xac6d, 0x469a, 0x97c4, 0x3229, 0x45bf]),
        y: FieldElement([0x9e66, 0x24c6, 0xedc0, 0x5da5, 0xd488, 0x73f0, 0x7b97, 0x7fea, 0xff42, 0xa021, 0x2f9b, 0xfd9a, 0x5753, 0x8407, 0x8848, 0x529d]),
        t: FieldElement([0xe9e2, 0xab15, 0xcbcf, 0x4408, 0x3f84, 0x9a5f, 0x5947, 0xa5b5, 0x0c6d, 0x7a69, 0x60f0, 0x9a46, 0xf715, 0x22a9, 0xf62b, 0x0986]),
    },
    // 2^119 * B
    BaseMultiple {
        x: FieldElement([0xc607, 0x1522, 0x9ce2, 0xa260, 0xd919, 0xae27, 0x4e37, 0xc9a6, 0xa680, 0x8f91, 0x4912, 0x00e5, 0x4718, 0xd7d1, 0x2228, 0x3963]),
        y: FieldElement([0xe2e8, 0x7e00, 0x9ef2, 0x991e, 0x9539, 0xbd04, 0x671e, 0xb27b, 0xac26, 0xaae6, 0x46e2, 0xe4d5, 0x86e8, 0xabbd, 0x557c, 0x6f59]),
        t: FieldElement([0x9dcd, 0xdc68, 0x2f4b, 0x5838, 0x9e57, 0x38ae, 0xdaf5, 0xe9e5, 0x7892, 0x191d, 0x8d9c, 0xad45, 0x7092, 0x06f2, 0x9818, 0x68f1]),
    },
    // 2^120 * B
    BaseMultiple {
        x: FieldElement([0x6424, 0x9b6e, 0x7135, 0xce78, 0x0333, 0x3321, 0xf136, 0x9b73, 0x15b9, 0x2c8b, 0xcf69, 0xed4d, 0x4d4f, 0x1457, 0x8213, 0x4da4]),
        y: FieldElement([0x6e65, 0xa40a, 0x0759, 0xf217, 0x4a6b, 0x6e1f, 0xb5f6, 0x62bc, 0xb6e4, 0xa2da, 0xbc93, 0x0529, 0xd2d2, 0x4673, 0x1603, 0x3140]),
        t: FieldElement([0xef73, 0x701a, 0x7bf6, 0x9269, 0x6696, 0x06d0, 0x31ef, 0xad52, 0x0d31, 0xe4e0, 0x1aaa, 0xee34, 0x9873, 0xef8e, 0x6d6c, 0x1061]),
    },
    // 2^121 * B
    BaseMultiple {
        x: FieldElement([0x734c, 0x156d, 0xa1bd, 0x5c4d, 0x0b13, 0x0624, 0x7898, 0x5b1c, 0x1feb, 0x5418, 0xd943, 0x6655, 0x29da, 0xe821, 0x3cb8, 0x2242]),
        y: FieldElement([0xcdb4, 0x6f08, 0x2315, 0x0b1a, 0xed22, 0xf1d1, 0xc7a7, 0x4573, 0x9ef3, 0x76ce, 0xf6b7, 0xb639, 0x798e, 0xe9be, 0xcf9b, 0x627d]),
        t: FieldElement([0x747f, 0x2405, 0x58b8, 0xc6f1, 0xa006, 0x8feb, 0xb36f, 0x8e9f, 0x10c9, 0x3c79, 0x01bf, 0x0d6e, 0xeac2, 0x9b42, 0x0485, 0x66ec]),
    },
    // 2^122 * B
    BaseMultiple {
        x: FieldElement([0x0bb4, 0xab32, 0x04dc, 0x5551, 0x1e21, 0x750b, 0x8999, 0x3573, 0x913a, 0xfe2b, 0x49e7, 0x76ea, 0xf9c1, 0xb946, 0x0253, 0x0423]),
        y: FieldElement([0x5afc, 0x1d1e, 0x5874, 0xa695, 0x7b8f, 0x3e97, 0x3b17, 0x2d79, 0x57a6, 0x45ef, 0x0b02, 0x6e4d, 0x939e, 0x2f8d, 0x9dd9, 0x04db]),
        t: FieldElement([0x936a, 0xf45d, 0x334a, 0x0dc8, 0xe5b3, 0x4b36, 0x507f, 0xe441, 0x2679, 0x0de6, 0x13f2, 0xc941, 0x36b4, 0x33b1, 0x7940, 0x5dc5]),
    },
    // 2^123 * B
    BaseMultiple {
        x: FieldElement([0xd7c0, 0x9756, 0x9158, 0x09de, 0x9f4f, 0x63be, 0x83b0, 0x4386, 0xbc5d, 0xf3e0, 0x75c0, 0x8bbf, 0xaa8e, 0x8bf7, 0x6e64, 0x63b0]),
        y: FieldElement([0xae16, 0xe08b, 0x249b, 0x5c68, 0xc244, 0x08d0, 0x7bb7, 0xfd62, 0xd87f, 0xb7d4, 0xfd50, 0x1b2c, 0x41bf, 0xd995, 0xd88e, 0x1b17]),
        t: FieldElement([0x2582, 0x61a5, 0x8c59, 0xe41d, 0x5a58, 0x4b09, 0xd91a, 0x032c, 0x8b32, 0x217d, 0xcbf7, 0x8a4f, 0x161d, 0x06b5, 0xb610, 0x6771]),
    },
    // 2^124 * B
    BaseMultiple {
        x: FieldElement([0x5586, 0x8e37, 0x38c3, 0x1448, 0x97b5, 0xa7d2, 0x4554, 0x35f1, 0x3844, 0xf19e, 0xb61b, 0x0034, 0x963c, 0x29ee, 0xea00, 0x0b2c]),
        y: FieldElement([0xdaea, 0x9e99, 0x8319, 0x6d66, 0x76e9, 0x5087, 0xfdd1, 0x603c, 0xc687, 0xd941, 0xdb8e, 0xde5e, 0x9aaa, 0x28d3, 0x95da, 0x47ea]),
        t: FieldElement([0xc40c, 0xda43, 0xc918, 0x6540, 0xa999, 0xf4b1, 0x3f5e, 0xec5b, 0x3cfa, 0x66a9, 0x7403, 0x2c47, 0x1177, 0xf181, 0x0160, 0x6a17]),
    },
    // 2^125 * B
    BaseMultiple {
        x: FieldElement([0xaabd, 0xe613, 0x45cd, 0xa44a, 0x0a59, 0xb164, 0xd698, 0x1334, 0xe604, 0x9497, 0xcb06, 0x4ed4, 0x96bb, 0xd1cd, 0xd157, 0x06e3]),
        y: FieldElement([0x6c7a, 0x2745, 0x93c4, 0x7d7f, 0x627c, 0x3850, 0x6b3a, 0x88b5, 0xd9c6, 0x78f1, 0xb919, 0x9339, 0xc93d, 0x9ce0, 0xce3c, 0x72f5]),
        t: FieldElement([0x6e46, 0x854b, 0x4b0d, 0xff09, 0x9df6, 0xf182, 0xb92d, 0x05cf, 0x3b80, 0xc3b9, 0x5c07, 0x4b63, 0xdbe1, 0x2371, 0x279f, 0x046b]),
    },
    // 2^126 * B
    BaseMultiple {
        x: FieldElement([0xea24, 0x7d23, 0x2c56, 0x59e2, 0x850e, 0x0460, 0x5a88, 0x1e74, 0xef4b, 0xda13, 0xff4c, 0x4583, 0x3f85, 0x9508, 0x202c, 0x1f13]),
        y: FieldElement([0x5f48, 0x9027, 0x025c, 0xad42, 0x4778, 0xb55c, 0x087e, 0x0085, 0x7ffa, 0xfdfd, 0x09e7, 0xf211, 0x1b7e, 0x6c38, 0x6d35, 0x6633]),
        t: FieldElement([0x5b4d, 0xb1c3, 0x8564, 0x41a9, 0xdf6c, 0x21b5, 0x90ff, 0x454d, 0x4ed1, 0xcc09, 0x4234, 0x300d, 0x3785, 0xba47, 0x5481, 0x58f2]),
    },
    // 2^127 * B
    BaseMultiple {
        x: FieldElement([0x0393, 0x8136, 0xe4ac, 0x0920, 0x4c35, 0xb245, 0x4c1e, 0x2114, 0xe9e6, 0x7b8a, 0xfe8d, 0xc61e, 0xc13e, 0xfa35, 0x70e7, 0x1d4e]),
        y: FieldElement([0x2e61, 0xddc2, 0x5795, 0xabd1, 0xe880, 0x1763, 0x48b5, 0x8ae4, 0x9e11, 0xbe72, 0x8d85, 0x0a51, 0x9ff2, 0x1ce0, 0x07a9, 0x7b28]),
        t: FieldElement([0xe513, 0xc7a3, 0x3389, 0x2337, 0x0d26, 0xf252, 0xff71, 0x5868, 0x91b1, 0xe48f, 0x4392, 0xc3b2, 0x6374, 0x35d3, 0xbe18, 0x273c]),
    },
    // 2^128 * B
    BaseMultiple {
        x: FieldElement([0xe824, 0x60b7, 0x47ae, 0xfc80, 0x23e5, 0xc2e7, 0x85c9, 0x98e6, 0x29a0, 0xe14e, 0x3984, 0x952d, 0xf32c, 0x3c45, 0xafff, 0x4c27]),
        y: FieldElement([0xa66b, 0x4bf5, 0xbd11, 0x5bba, 0xc49e, 0x51a4, 0xbe1e, 0x90d0, 0x9c3a, 0x26c2, 0x1eb6, 0x95f1, 0xc87d, 0x526d, 0x99e6, 0x5f2c]),
        t: FieldElement([0x338a, 0x46f1, 0x31c9, 0xe9e7, 0xada9, 0x6663, 0x6482, 0x1478, 0x4b6a, 0x0792, 0x5600, 0xd4e1, 0x602f, 0x0bf4, 0x64fd, 0x05a1]),
    },
    // 2^129 * B
    BaseMultiple {
        x: FieldElement([0xe085, 0x3224, 0xd1b4, 0xfcef, 0xa269, 0x8fbf, 0x2c72, 0xf695, 0x6ee4, 0x907d, 0x57f7, 0xa081, 0xdaf7, 0x33ef, 0xe307, 0x786b]),
        y: FieldElement([0x2736, 0xc63e, 0x0712, 0x4eab, 0x69be, 0xb39d, 0x08be, 0x2a7c, 0x0847, 0xd4fd, 0x0ecd, 0x3427, 0x985b, 0x2f34, 0x5f77, 0x653a]),
        t: FieldElement([0x64c8, 0x719f, 0xe817, 0x00c4, 0xbd6e, 0x57ba, 0xee55, 0x96c4, 0xd8ec, 0x5bd3, 0x669a, 0x0d90, 0x3e8b, 0x4d31, 0x3ed3, 0x12c7]),
    },
    // 2^130 * B
    BaseMultiple {
        x: FieldElement([0xaa13, 0x4c2e, 0x22f0, 0x6cb8, 0x19b3, 0xeb4d, 0xd06b, 0xc6a4, 0xdd9c, 0x5bc8, 0x5781, 0xdf89, 0xa933, 0x4968, 0xe480, 0x21fe]),
        y: FieldElement([0x1700, 0x3090, 0xd3e9, 0x3060, 0xc231, 0x8972, 0x367a, 0xbda5, 0x8339, 0x5085, 0x5da1, 0x416c, 0xb51d, 0x072c, 0x7740, 0x500b]),
        t: FieldElement([0x81f8, 0xe1b3, 0xa584, 0xdd80, 0x97f0, 0xe207, 0x7116, 0xea46, 0x94ab, 0x05e8, 0x27ef, 0x688e, 0x8ff0, 0x8c18, 0x88f6, 0x1985]),
    },
    // 2^131 * B
    BaseMultiple {
        x: FieldElement([0xb3df, 0x1146, 0x136e, 0x28b7, 0x564e, 0xf1dd, 0xadac, 0xc358, 0x88f8, 0x5e94, 0x9806, 0xe4a1, 0xfb6a, 0x490a, 0x8a5d, 0x77fe]),
        y: FieldElement([0x0246, 0xa5f5, 0xc5af, 0x6d75, 0x45ba, 0x0a35, 0xc9fe, 0x22ac, 0x8d91, 0x9521, 0x0333, 0x8ac0, 0xf316, 0xe039, 0x0f01, 0x3c53]),
        t: FieldElement([0xad2c, 0x1b52, 0x6686, 0xfe2d, 0x0906, 0x9580, 0xdcfa, 0x3ad8, 0xeb58, 0xffce, 0xf263, 0x8524, 0x081f, 0x7726, 0xc58c, 0x25a2]),
    },
    // 2^132 * B
    BaseMultiple {
        x: FieldElement([0x7534, 0x1f37, 0x4e34, 0x1da9, 0x6768, 0x49f8, 0x9698, 0x4cfc, 0x9765, 0x02f7, 0x524a, 0x016c, 0x48bd, 0x1bbb, 0xa4ed, 0x53e2]),
        y: FieldElement([0xd559, 0x5a9b, 0x90a2, 0xb8d3, 0x4c37, 0x8255, 0x0828, 0x7f0f, 0x81aa, 0xe065, 0x520c, 0xa3c9, 0x2732, 0xda64, 0x34fd, 0x5a23]),
        t: FieldElement([0x5b12, 0x5ae6, 0xe767, 0xf77e, 0x5bcd, 0xe66e, 0x5d5d, 0xa448, 0x8232, 0x9fd3, 0xb76e, 0x495d, 0x015b, 0xbf55, 0x7057, 0x42bc]),
    },
    // 2^133 * B
    BaseMultiple {
        x: FieldElement([0xb0b5, 0x4d0c, 0x7bb3, 0xc823, 0x8a1f, 0x6639, 0xbae6, 0x104c, 0xca37, 0x7c9c, 0x9e05, 0xc0ff, 0x8ef8, 0x8fb1, 0x676f, 0x2618]),
        y: FieldElement([0x414b, 0x5413, 0x1a23, 0x4ea4, 0x8ba9, 0x4b1e, 0x15fc, 0xbb24, 0xcb7e, 0x1eb6, 0xf51b, 0xc8f2, 0xec56, 0xa232, 0x5b60, 0x2aa0]),
        t: FieldElement([0xb8a1, 0xf9ba, 0x7c09, 0x87ba, 0x76a6, 0xeaeb, 0x35f6, 0xc254, 0x778b, 0xb70f, 0x8185, 0xe423, 0xb7d1, 0x97da, 0x1ac4, 0x41f6]),
    },
    // 2^134 * B
    BaseMultiple {
        x: FieldElement([0x6c0a, 0xbc4f, 0x323e, 0x4ae7, 0x131a, 0x49c1, 0xbf38, 0xc2f7, 0x8fd3, 0xad6b, 0xf752, 0xbccf, 0xcb27, 0x6740, 0xcd76, 0x566d]),
        y: FieldElement([0xb0e5, 0xad27, 0x9bbe, 0xb5f2, 0xde63, 0x233a, 0xb795, 0x7e0a, 0x9ef3, 0x6f45, 0x3919, 0x8f75, 0x3d39, 0xc00f, 0xf19f, 0x51e9]),
        t: FieldElement([0x0cf6, 0x9020, 0x7a62, 0x4aa6, 0xe4cf, 0x2614, 0xe713, 0x7928, 0xf714, 0x293d, 0x3277, 0xfc2a, 0x3237, 0x13e6, 0xc9fb, 0x1d21]),
    },
    // 2^135 * B
    BaseMultiple {
        x: FieldElement([0xaa88, 0x2414, 0x9486, 0x1211, 0x1a3e, 0xccb5, 0xe0bb, 0xd59c, 0x6d9c, 0x58ba, 0x8d72, 0x22fb, 0x9f7b, 0x947c, 0xb330, 0x2151]),
        y: FieldElement([0x74f6, 0xf23d, 0xd0af, 0x031e, 0x237c, 0xc96b, 0x25fc, 0x9070, 0x9adc, 0xfba4, 0xfc49, 0x0a3d, 0x3835, 0xe46f, 0x507e, 0x2a01]),
        t: FieldElement([0x0b36, 0x3a65, 0xc8e8, 0x23c2, 0xa1fb, 0x3141, 0x2f98, 0xafaf, 0x2fbc, 0xb691, 0x95c0, 0x6053, 0x18af, 0x0539, 0x318b, 0x1532]),
    },
    // 2^136 * B
    BaseMultiple {
        x: FieldElement([0xe3d6, 0x6196, 0xfd3a, 0x9bef, 0x901f, 0x24a4, 0x5b14, 0xdec8, 0xb150, 0xaf1d, 0x55e8, 0x878a, 0xfe0d, 0x3baa, 0x2c82, 0x7b8d]),
        y: FieldElement([0x0c85, 0xf8af, 0x4483, 0xd949, 0xcf45, 0x48f7, 0x53d9, 0xf1b4, 0xa065, 0xc3e1, 0x15b3, 0x89ed, 0x4f9b, 0xb362, 0xa557, 0x1c45]),
        t: FieldElement([0x97b6, 0x7f26, 0x43e1, 0xcfc2, 0x3630, 0xc998, 0xc628, 0xe5d8, 0x2817, 0xe74b, 0xeb65, 0x0034, 0xcc34, 0xa1bd, 0x683e, 0x5247]),
    },
    // 2^137 * B
    BaseMultiple {
        x: FieldElement([0xc188, 0xd099, 0x1c3c, 0xb45d, 0x13ef, 0x900f, 0x36b9, 0x952f, 0xc695, 0xdedc, 0x510a, 0x8de2, 0xbcf3, 0xec51, 0xb1df, 0x5fa2]),
        y: FieldElement([0x682e, 0x23a1, 0x9b7d, 0x6940, 0x7b85, 0xbf42, 0x4b90, 0x40d6, 0xd72f, 0x5252, 0x21b2, 0x64de, 0x88bd, 0x6dc3, 0xfaa5, 0x3f81]),
        t: FieldElement([0x5f99, 0xb1b7, 0x9648, 0xc00f, 0xf7d3, 0xc546, 0xaa1c, 0x48c1, 0x2ea1, 0x8365, 0x83fb, 0x72e3, 0x89ab, 0x4884, 0x62b2, 0x59fa]),
    },
    // 2^138 * B
    BaseMultiple {
        x: FieldElement([0xfdfb, 0x7b47, 0x668a, 0x799e, 0x642e, 0xef82, 0x21f7, 0xf6ec, 0x86d8, 0x3109, 0xdd7c, 0x6a03, 0xa058, 0xb777, 0x8c9b, 0x1f87]),
        y: FieldElement([0x4755, 0xa8e4, 0x553d, 0x3421, 0x1dab, 0xe0ae, 0xeaf4, 0xc5db, 0x58b9, 0xc4bf, 0x892a, 0x1a31, 0x2df4, 0xcae1, 0x9937, 0x5947]),
        t: FieldElement([0xcdc4, 0x79db, 0x3479, 0x3311, 0x696b, 0xc3fc, 0x95e7, 0xa2b3, 0xb206, 0x54de, 0xd6ea, 0x5466, 0x55ef, 0x5035, 0xe124, 0x0659]),
    },
    // 2^139 * B
    BaseMultiple {
        x: FieldElement([0xcac7, 0xc163, 0xa949, 0x4535, 0x7e55, 0x64da, 0x0732, 0xf750, 0xac32, 0x75de, 0x9b58, 0xb211, 0x1f3a, 0xf7f5, 0x0479, 0x08e6]),
        y: FieldElement([0xfa46, 0x4b22, 0xe1fa, 0x96fe, 0x67fc, 0x67ba, 0xc497, 0x1be7, 0x9086, 0xee5f, 0x5bf4, 0xb211, 0xadcd, 0xc2ee, 0x6c48, 0x1b2b]),
        t: FieldElement([0x33c8, 0x7928, 0x8f0f, 0xd21a, 0x053c, 0x09bf, 0xb7ba, 0x6472, 0x63e9, 0xbb6c, 0x5713, 0x7935, 0xe987, 0x10c3, 0x6b8d, 0x0d0f]),
    },
    // 2^140 * B
    BaseMultiple {
        x: FieldElement([0x7ffe, 0x35fb, 0xc67d, 0x2301, 0xc428, 0xac02, 0x421f, 0x9db4, 0x00fc, 0xa594, 0xcaee, 0x97da, 0x4109, 0x8777, 0x7b5d, 0x7887]),
        y: FieldElement([0xfbf5, 0x2d90, 0x1981, 0x2f9e, 0x856d, 0x8c88, 0x5c40, 0x4177, 0x014d, 0x7619, 0xe860, 0x484c, 0x33e4, 0x3283, 0xb46c, 0x0341]),
        t: FieldElement([0xae38, 0x2091, 0x7832, 0xb6a1, 0xe0d6, 0xe3f8, 0x1d3f, 0x0a54, 0xab88, 0xf2b9, 0x20c2, 0x5b93, 0x6991, 0x0389, 0xc239, 0x410a]),
    },
    // 2^141 * B
    BaseMultiple {
        x: FieldElement([0x10ff, 0x09c2, 0x6e4f, 0xd2f4, 0x7edf, 0x7bca, 0x1d1c, 0xa3ba, 0xdab6, 0x3367, 0x87d4, 0x4b36, 0x2011, 0xa605, 0xc129, 0x1787]),
        y: FieldElement([0x96f6, 0x2fca, 0x38da, 0x1ba7, 0xcafc, 0xfe7d, 0x8908, 0x47e2, 0x6a2b, 0x4b5d, 0xa1fa, 0xdeb4, 0xc2b6, 0x5131, 0xe0f5, 0x0ba4]),
        t: FieldElement([0x2dd7, 0x1fac, 0x8f83, 0x5796, 0x612c, 0xf2cb, 0x52d4, 0x8fae, 0x9150, 0x302f, 0x9aa9, 0xdef0, 0x3103, 0xeb22, 0x5bc6, 0x52fa]),
    },
    // 2^142 * B
    BaseMultiple {
        x: FieldElement([0xe55c, 0x04c6, 0x2b8e, 0xbe57, 0x8538, 0xcb23, 0xbeb7, 0xa94f, 0x6ed3, 0xaa12, 0xb2d5, 0x932e, 0x9a29, 0x884a, 0x4318, 0x01f5]),
        y: FieldElement([0xfc50, 0xa2db, 0x2159, 0xbd8d, 0x337e, 0x2fae, 0x1a87, 0x97d0, 0x0dc7, 0x634d, 0xef01, 0x8405, 0x40ec, 0xa8dd, 0x4f0a, 0x0b70]),
        t: FieldElement([0x6cc2, 0xb5e0, 0xaa66, 0xb9af, 0xd312, 0x65d5, 0xa14b, 0x2bbf, 0xced8, 0xf05f, 0x6e1e, 0x92da, 0xf28b, 0x1bb8, 0xdfd1, 0x668f]),
    },
    // 2^143 * B
    BaseMultiple {
        x: FieldElement([0x263f, 0x40e9, 0x03e9, 0x06ad, 0x9169, 0xd1e0, 0x6089, 0x7984, 0x27de, 0xe66d, 0xbd76, 0xe6ea, 0x48ae, 0x67c3, 0x57c0, 0x2fcd]),
        y: FieldElement([0xc17f, 0xb9dc, 0xbcc7, 0x3d86, 0x4b55, 0x7a28, 0x4dfb, 0xf8c7, 0x67bc, 0x602a, 0x8f4d, 0x0b07, 0x171a, 0xfabf, 0xa7ac, 0x1a3d]),
        t: FieldElement([0x2634, 0xa9c2, 0x8929, 0xadd6, 0x87b1, 0x848a, 0x9d2d, 0xa7ea, 0x3ef1, 0x5bc0, 0x1e28, 0x962e, 0x8d87, 0x17ec, 0x5ade, 0x3412]),
    },
    // 2^144 * B
    BaseMultiple {
        x: FieldElement([0x3f91, 0x5eed, 0x7818, 0x233f, 0x0d2c, 0x448c, 0xe800, 0xe9fb, 0xd68e, 0x36d1, 0x5758, 0xae9e, 0x5c4b, 0x070b, 0x6bbc, 0x2b55]),
        y: FieldElement([0x4d6f, 0xd717, 0x84e1, 0x78d9, 0x90b1, 0x2efd, 0xb5b3, 0x3f19, 0xfa1b, 0x68c0, 0xddb3, 0x2e00, 0xbd89, 0x807e, 0x1332, 0x7ba0]),
        t: FieldElement([0x8c2c, 0xdc01, 0xf3ca, 0x3b40, 0x5a62, 0xa454, 0xa3af, 0x4f44, 0xc429, 0x0131, 0xd66c, 0xcd13, 0x9d57, 0xb7fc, 0x6c2a, 0x5836]),
    },
    // 2^145 * B
    BaseMultiple {
        x: FieldElement([0x6f1a, 0xaf40, 0x4444, 0x43b0, 0x0d8f, 0x1ed0, 0x0bc4, 0x5d19, 0xfe8e, 0xf3c1, 0x5cc5, 0xf891, 0x4e04, 0x90be, 0x47b4, 0x3f5c]),
        y: FieldElement([0x3bb0, 0xf32c, 0x32fe, 0x0771, 0xaa3f, 0x45ba, 0xa860, 0xea8d, 0xcb54, 0x1039, 0xf2b4, 0xd28b, 0x8214, 0x0742, 0xe98e, 0x537c]),
        t: FieldElement([0x0fd8, 0x873b, 0x20eb, 0x6b58, 0xa765, 0x3bd5, 0xba7b, 0x3f26, 0x0555, 0xd240, 0x9a0b, 0xb33d, 0x88b8, 0x65a0, 0xf700, 0x5ed1]),
    },
    // 2^146 * B
    BaseMultiple {
        x: FieldElement([0xf85d, 0xa8b4, 0xdd30, 0x38cc, 0xd3a5, 0xd8ca, 0xf8d1, 0x31b2, 0xd491, 0x0572, 0x4a57, 0x823b, 0xc64a, 0x2068, 0x18e2, 0x6141]),
        y: FieldElement([0xd419, 0x478d, 0x1229, 0xb065, 0x7811, 0xb547, 0xa3cb, 0xfaa5, 0x8505, 0xa954, 0x9733, 0x2b8d, 0xfec2, 0x3599, 0xe528, 0x63eb]),
        t: FieldElement([0x2993, 0x1972, 0xffe0, 0x1fbf, 0x6718, 0xa50e, 0x7475, 0xa151, 0x3291, 0x8881, 0x41f3, 0x4c81, 0xbd8d, 0x19ed, 0x742e, 0x57fc]),
    },
    // 2^147 * B
    BaseMultiple {
        x: FieldElement([0x3fb1, 0xef3f, 0xf4d8, 0xb3fc, 0x60a0, 0x0650, 0x292b, 0x7052, 0x0b15, 0x2424, 0x5ff8, 0x1879, 0xffcc, 0x9989, 0xa184, 0x13ae]),
        y: FieldElement([0x1f44, 0xc2b8, 0xc101, 0x1930, 0x0555, 0x1060, 0x6ca4, 0x672d, 0xe570, 0x1b25, 0xbff2, 0xfbdd, 0x2b70, 0x8ca1, 0x949c, 0x0884]),
        t: FieldElement([0x027e, 0x765a, 0xdd4f, 0x24b7, 0x75a5, 0xe7a8, 0x12ca, 0x666b, 0x4858, 0x6097, 0x7cc7, 0x4ad8, 0xe201, 0xdfb5, 0xa9cb, 0x2260]),
    },
    // 2^148 * B
    BaseMultiple {
        x: FieldElement([0xc4e7, 0x4d43, 0x2bc9, 0x5d69, 0x3c1d, 0xbbaf, 0x3843, 0x984e, 0xed3d, 0x210d, 0xfd03, 0x99f0, 0x0447, 0x98b0, 0x5569, 0x0f72]),
        y: FieldElement([0xdf5e, 0x5315, 0x863b, 0xb080, 0x70f1, 0x8f68, 0x7c66, 0x490e, 0xd81a, 0xfe6b, 0xef4e, 0x47ca, 0x03d4, 0x37c1, 0x9c50, 0x16c1]),
        t: FieldElement([0x990d, 0x0377, 0xa0ca, 0x97a1, 0xa1f1, 0x0256, 0x977e, 0xdf18, 0xea06, 0xcf7e, 0x9404, 0x5d4e, 0xaf8e, 0x7e79, 0x9dc2, 0x618d]),
    },
    // 2^149 * B
    BaseMultiple {
        x: FieldElement([0x371b, 0xe347, 0x9ef5, 0x2cea, 0xe72a, 0x3682, 0x1ff4, 0x4781, 0x4b92, 0x0e69, 0x8c11, 0x535d, 0x815b, 0x0827, 0xa0bc, 0x25ae]),
        y: FieldElement([0x3269, 0x05a1, 0x4211, 0xd200, 0xac59, 0x624d, 0x138b, 0x50e2, 0xa05d, 0x9b9d, 0xbbfd, 0x4112, 0x4175, 0xcc9e, 0xc7dc, 0x5ddc]),
        t: FieldElement([0xc1cd, 0xfd7d, 0xbdd2, 0x5170, 0xfc70, 0x4ebc, 0x808d, 0x6d18, 0xb3be, 0xc3b4, 0xa98f, 0x8667, 0x0983, 0x1ff6, 0x9180, 0x294c]),
    },
    // 2^150 * B
    BaseMultiple {
        x: FieldElement([0xe3d9, 0x0638, 0x7046, 0x5e82, 0x4928, 0xff79, 0xd225, 0x294e, 0x068d, 0x23b0, 0x9bae, 0xe466, 0xc07d, 0x9170, 0xfca3, 0x4eec]),
        y: FieldElement([0x1262, 0x6a37, 0xf630, 0xfb1e, 0x5c14, 0x0e0d, 0x81b7, 0xe76a, 0x0508, 0xaaac, 0x4638, 0x73e2, 0x4bea, 0x8107, 0x7c43, 0x5e9e]),
        t: FieldElement([0x753b, 0xe856, 0xc698, 0x9725, 0xf767, 0x7467, 0xba11, 0x01aa, 0xfb23, 0xb885, 0x4e15, 0x8545, 0x5cc7, 0xa56f, 0x8bbb, 0x3d83]),
    },
    // 2^151 * B
    BaseMultiple {
        x: FieldElement([0xf9fc, 0x4f21, 0x762e, 0x1f9b, 0x6028, 0x4377, 0x9d32, 0x17be, 0x2a30, 0x18c6, 0x6692, 0x3062, 0x4098, 0xa611, 0x187f, 0x2884]),
        y: FieldElement([0xab3f, 0xf4d3, 0x768a, 0x3ca1, 0x2dca, 0xc349, 0x08ea, 0x850b, 0x2a17, 0x6cc3, 0xfd08, 0x9f57, 0x5f3d, 0x67df, 0x4268, 0x3200]),
        t: FieldElement([0xe47b, 0x9da5, 0x9c69, 0x289f, 0x3ea9, 0x546b, 0xe3f3, 0x4b12, 0x5bad, 0xb0a6, 0xaf66, 0x3925, 0xfc1c, 0xdbad, 0x5332, 0x1c49]),
    },
    // 2^152 * B
    BaseMultiple {
        x: FieldElement([0xda1a, 0xa5f3, 0x4341, 0xfc28, 0xe77e, 0xea71, 0x3bc6, 0xcc59, 0xd32e, 0xec40, 0x13b3, 0x446f, 0x13cd, 0x37b2, 0x6ef2, 0x1cd9]),
        y: FieldElement([0xdbe3, 0xcd60, 0x4a5c, 0x0f18, 0x73ef, 0x7136, 0xf68c, 0xb411, 0xced8, 0x5e17, 0x264f, 0x9777, 0xcb5f, 0x91ef, 0x6aeb, 0x7a62]),
        t: FieldElement([0xa750, 0x5a4c, 0xdda7, 0xbbe9, 0xe890, 0xf22d, 0xc6bb, 0xcf1e, 0xcf67, 0x8988, 0xbbab, 0x09d4, 0x10ac, 0x1a09, 0x9cd8, 0x6e76]),
    },
    // 2^153 * B
    BaseMultiple {
        x: FieldElement([0x4a18, 0x97a2, 0x8108, 0x832d, 0xccc4, 0x83f0, 0xec7e, 0x950d, 0x5b4c, 0xfafb, 0x8098, 0x664a, 0x0c56, 0xb351, 0x04f2, 0x275d]),
        y: FieldElement([0xb93b, 0x06b8, 0x2e5a, 0xc3fe, 0x3782, 0xa39c, 0x1f11, 0xa69c, 0x63da, 0x9b48, 0xdead, 0xa62d, 0x6ebc, 0xda32, 0x6527, 0x57dd]),
        t: FieldElement([0x4eeb, 0x01aa, 0x37c3, 0xd841, 0x2336, 0x901c, 0xd42d, 0x55ab, 0x0e30, 0x4a62, 0xaf33, 0xf2c2, 0xf48d, 0x3e8a, 0x3c99, 0x4dfc]),
    },
    // 2^154 * B
    BaseMultiple {
        x: FieldElement([0x4f84, 0x3137, 0x2e7d, 0xadbc, 0x0787, 0x6b2a, 0xfc37, 0xeb5f, 0x754e, 0xa635, 0xabde, 0x190a, 0xb73a, 0xefb1, 0x6a92, 0x3c3b]),
        y: FieldElement([0xb23b, 0x6d94, 0x6039, 0xeeac, 0x81e7, 0x3b1a, 0x8776, 0x055c, 0x2a94, 0xb945, 0xe980, 0xb122, 0xcb07, 0x9e40, 0x4970, 0x126d]),
        t: FieldElement([0xa548, 0x71dd, 0x4f62, 0xfacf, 0xd3a6, 0xa322, 0xbac2, 0x1ec9, 0xda72, 0x40ab, 0x22a9, 0xe230, 0x45dd, 0x6008, 0xcce6, 0x30c7]),
    },
    // 2^155 * B
    BaseMultiple {
        x: FieldElement([0x6055, 0x5b55, 0x1de4, 0x4c71, 0x5b9d, 0x709f, 0x85a6, 0x2c9a, 0xe2a0, 0x4832, 0x9ece, 0xa52a, 0x3b07, 0x6cc7, 0x7786, 0x3cde]),
        y: FieldElement([0x18f7, 0x967a, 0x437e, 0xa957, 0xfc55, 0xb64e, 0x0072, 0xe4f2, 0x52d7, 0xd3d3, 0x85b6, 0x71f6, 0x44c7, 0x7f3f, 0xb3d7, 0x79f2]),
        t: FieldElement([0xcfca, 0x4b9c, 0xa84b, 0xa2ca, 0x1964, 0x2e84, 0x49af, 0x403e, 0x66c5, 0xdebe, 0xaebf, 0x5ff0, 0xe65b, 0x48be, 0x1c97, 0x273f]),
    },
    // 2^156 * B
    BaseMultiple {
        x: FieldElement([0xca46, 0x55a7, 0x797b, 0xcaf3, 0x655a, 0xedf6, 0x1450, 0xe47b, 0x2ac4, 0x9e65, 0xf9e2, 0xa7ca, 0x2622, 0xcb53, 0x5b21, 0x31a7]),
        y: FieldElement([0xd790, 0x26c5, 0xbd08, 0x53b0, 0x5863, 0x31c3, 0x755e, 0x1546, 0xa691, 0x2ff8, 0x081a, 0x8865, 0x982f, 0xf104, 0x6e7c, 0x7700]),
        t: FieldElement([0xd825, 0x5ffc, 0x7778, 0x5196, 0xb8b3, 0xe98e, 0x2b60, 0xc382, 0x83e6, 0xd15f, 0xe3b7, 0x29ca, 0x4940, 0x9e93, 0xc17b, 0x2dee]),
    },
    // 2^157 * B
    BaseMultiple {
        x: FieldElement([0x2181, 0x0961, 0x4ef6, 0x92f1, 0x63ee, 0x7361, 0xc787, 0x0e54, 0x4b42, 0x47c9, 0xb8d1, 0x917e, 0x3775, 0x2899, 0xddb8, 0x507f]),
        y: FieldElement([0x8f89, 0xbec0, 0xd65d, 0xa09f, 0x9df0, 0xce81, 0x7b3a, 0x5898, 0xd7bb, 0xc878, 0x133f, 0x74f1, 0xdf19, 0x98f8, 0x5d89, 0x5ffa]),
        t: FieldElement([0x3aca, 0xdbc0, 0x2ce0, 0x150a, 0x5d6d, 0x1588, 0x9b8e, 0x5541, 0x38fa, 0x9de1, 0x9098, 0x7f07, 0xce85, 0x4441, 0xe385, 0x14bb]),
    },
    // 2^158 * B
    BaseMultiple {
        x: FieldElement([0x2aa3, 0x3761, 0x59e2, 0x0e12, 0xba27, 0x4364, 0xc0ae, 0x6942, 0xa479, 0x291e, 0x158b, 0xf8eb, 0xd4af, 0x68a2, 0xb533, 0x247a]),
        y: FieldElement([0x192c, 0xdd33, 0xab1b, 0x01ec, 0x23b0, 0x42f8, 0x062b, 0xea88, 0x2d3d, 0x2a00, 0x4578, 0x384d, 0x2eed, 0x442e, 0xed49, 0x33cb]),
        t: FieldElement([0x61c3, 0x5860, 0x96c6, 0xf5d9, 0x63a2, 0xef1f, 0x7713, 0xaa83, 0x3046, 0xd6c9, 0x5ff5, 0x8096, 0x0f6f, 0x971f, 0xe38e, 0x28f1]),
    },
    // 2^159 * B
    BaseMultiple {
        x: FieldElement([0x68a0, 0x41e8, 0x918f, 0x11f8, 0x9013, 0xa72e, 0x30ab, 0xadef, 0x61a0, 0x8800, 0xdbef, 0x5bce, 0xbb5c, 0xc862, 0xf956, 0x7300]),
        y: FieldElement([0x603f, 0x82c1, 0xa32d, 0x5828, 0x9e24, 0xe39f, 0xcc70, 0x4e09, 0x3f1a, 0x1111, 0x0715, 0xa43c, 0xe041, 0xa365, 0x410a, 0x116d]),
        t: FieldElement([0xd760, 0x40a5, 0x47fe, 0x667c, 0x49ad, 0xc192, 0x2aff, 0x3b41, 0xf9a6, 0xf240, 0x44c2, 0x39b2, 0xf000, 0x20eb, 0x51ee, 0x5a1b]),
    },
    // 2^160 * B
    BaseMultiple {
        x: FieldElement([0x4031, 0x5201, 0x9456, 0x285b, 0xaa8a, 0xee52, 0x0ad8, 0x8d05, 0xb5cd, 0x2eaa, 0xaa38, 0x87b7, 0x2bf7, 0x04fb, 0x84cb, 0x543d]),
        y: FieldElement([0xef20, 0xde59, 0x2ba4, 0x6e93, 0xec2e, 0x9a42, 0x2dd4, 0x46f4, 0x2758, 0x182b, 0x838f, 0x693d, 0xd49e, 0xb63e, 0xfdc5, 0x0358]),
        t: FieldElement([0x2220, 0x0398, 0x264a, 0xe5c7, 0xd5a7, 0xdf18, 0xe29d, 0x6a55, 0x0c8e, 0x3ce0, 0x06a7, 0x3c9a, 0x726c, 0x3f4b, 0x56cc, 0x045a]),
    },
    // 2^161 * B
    BaseMultiple {
        x: FieldElement([0x5ea1, 0x4f60, 0xe1fb, 0x6a70, 0x551f, 0x094f, 0x95b4, 0x3633, 0x81c6, 0x1801, 0x2506, 0xa427, 0x24b4, 0x86a4, 0x4c03, 0x02ac]),
        y: FieldElement([0x3877, 0xd7de, 0x4860, 0xf007, 0xa874, 0x54ff, 0x30e5, 0xff43, 0xfb77, 0x0721, 0xb2ff, 0x6b07, 0xe5e4, 0xfc30, 0x6c19, 0x01a3]),
        t: FieldElement([0xe480, 0x500b, 0x551a, 0x8285, 0xe803, 0xb4c2, 0xe771, 0x4759, 0x0af9, 0x6767, 0x0c9a, 0x3dad, 0x3469, 0x1e34, 0x1493, 0x234e]),
    },
    // 2^162 * B
    BaseMultiple {
        x: FieldElement([0xc513, 0xac2c, 0x83d3, 0x7c82, 0xf729, 0xa505, 0xb600, 0x861f, 0xf455, 0x2fd6, 0x990c, 0x65d0, 0x6b9b, 0x0d46, 0xf843, 0x2816]),
        y: FieldElement([0x7f1e, 0x74b4, 0xb17e, 0x4f89, 0x5a18, 0x64ab, 0xdf06, 0x8745, 0x6ae0, 0xf0c6, 0xc90e, 0x3524, 0xea38, 0x5430, 0xc4b4, 0x5452]),
        t: FieldElement([0x5752, 0x4bb3, 0x039e, 0x23ec, 0x6a54, 0xe887, 0x00e1, 0x5938, 0xea02, 0x8c3c, 0x5b75, 0xb24e, 0x886b, 0xfd0d, 0x3c75, 0x464a]),
    },
    // 2^163 * B
    BaseMultiple {
        x: FieldElement([0x9fe9, 0x3fdc, 0x89c1, 0x7444, 0xe427, 0x90c1, 0x4aff, 0x3ca7, 0xcdee, 0x1df4, 0x9425, 0x637f, 0x4816, 0x64bc, 0x95fe, 0x0cc4]),
        y: FieldElement([0x198b, 0x6e75, 0x0603, 0x6a5e, 0x1a6f, 0xe38c, 0x28d3, 0xe0f2, 0x7ab9, 0x6943, 0xd3e6, 0xfec0, 0x977e, 0x6cab, 0x8e7b, 0x4213]),
        t: FieldElement([0xe189, 0xdbb7, 0x64e4, 0x31cc, 0xd83c, 0x9e26, 0xd70a, 0x5b56, 0x107f, 0x9a71, 0x4d15, 0x8208, 0x2107, 0x6633, 0xc8da, 0x3d0a]),
    },
    // 2^164 * B
    BaseMultiple {
        x: FieldElement([0x205a, 0xa15b, 0x44a5, 0x2491, 0x6302, 0x6412, 0x55b8, 0xdef6, 0xdb2c, 0xb847, 0x0ac6, 0x00c3, 0x9378, 0xf5d8, 0x18f5, 0x0a28]),
        y: FieldElement([0x1bd6, 0x6c9a, 0x46e5, 0x70ea, 0x8d96, 0x2a4e, 0x2152, 0x4b26, 0xbbb1, 0x7c0f, 0x9ba9, 0xbb04, 0x0851, 0x9af1, 0x76a4, 0x187c]),
        t: FieldElement([0x74f0, 0xfb6b, 0x7507, 0x3c9a, 0x041a, 0xf8e9, 0xb62a, 0x58aa, 0xc93a, 0x604d, 0xa43e, 0x6ae6, 0x2e70, 0x62d2, 0x2af2, 0x6619]),
    },
    // 2^165 * B
    BaseMultiple {
        x: FieldElement([0x94fa, 0x40f7, 0xd7d0, 0xa9eb, 0x3682, 0x15d5, 0x33b9, 0xbf7a, 0xf28a, 0xaa63, 0xf537, 0xac59, 0xbbbd, 0x3632, 0x73be, 0x3899]),
        y: FieldElement([0xb32c, 0x7ada, 0x3dd8, 0xca99, 0xf4d2, 0x99da, 0x4f8e, 0xb798, 0xaef4, 0x9f3e, 0x358e, 0xa460, 0x7533, 0x04a4, 0xb193, 0x4d6b]),
        t: FieldElement([0x5f3d, 0x7452, 0x4a75, 0x3614, 0x835f, 0xcd9b, 0x5ff0, 0x3f31, 0x7f05, 0x8dcf, 0x054e, 0xbcba, 0x8dcf, 0x0ad5, 0xea26, 0x42e1]),
    },
    // 2^166 * B
    BaseMultiple {
        x: FieldElement([0x9d97, 0xcda8, 0x7b97, 0xb99d, 0xa5e7, 0xfdef, 0x42a8, 0xc36b, 0x6462, 0xa57d, 0xc91b, 0xd29e, 0xb945, 0x03ee, 0xbfb0, 0x68c0]),
        y: FieldElement([0xb7ed, 0x2c84, 0xd3f6, 0x6ba1, 0x6d24, 0x5687, 0x5997, 0x6279, 0xac9f, 0xf3ed, 0x89c9, 0x2e21, 0xb304, 0x2fcc, 0xd6be, 0x4b0a]),
        t: FieldElement([0x7bf7, 0xf5cb, 0x16ba, 0x0b38, 0x0060, 0x6c79, 0x791b, 0x3058, 0x1b2c, 0x4690, 0xb706, 0x29a0, 0xb541, 0xb52a, 0xa861, 0x41bc]),
    },
    // 2^167 * B
    BaseMultiple {
        x: FieldElement([0x8c22, 0xbe6b, 0x4dfc, 0x6270, 0x526e, 0x9977, 0x7e88, 0x577b, 0x0d7a, 0xdcfe, 0x9272, 0x68f1, 0x971d, 0x7cd7, 0x538d, 0x3710]),
        y: FieldElement([0x8853, 0x0277, 0x27ca, 0xe5a8, 0xe245, 0x48a8, 0xab2a, 0xca18, 0x2dea, 0x542a, 0x3717, 0x0932, 0xe0dc, 0xb74a, 0x827d, 0x7d10]),
        t: FieldElement([0x3ef3, 0x1765, 0x4e16, 0xe802, 0xf417, 0x0caa, 0x9f1f, 0x51d5, 0xb32a, 0xc5ab, 0x5e35, 0x619a, 0xf1e0, 0x782a, 0x8a57, 0x3223]),
    },
    // 2^168 * B
    BaseMultiple {
        x: FieldElement([0x648a, 0x141e, 0x570a, 0xdad4, 0x965c, 0x019b, 0x674c, 0x8bbf, 0xfe30, 0xdb08, 0xd50d, 0xd7a8, 0x1109, 0xa285, 0x45d3, 0x7efb]),
        y: FieldElement([0x8cda, 0xd0c2, 0x18ac, 0x52e8, 0xd436, 0xa321, 0x57dd, 0x7922, 0xf8b7, 0x9d71, 0x91c6, 0x8670, 0xbf56, 0x11a1, 0x198b, 0x0fe1]),
        t: FieldElement([0x6200, 0xe8ac, 0x6b61, 0x6421, 0x27b5, 0xa5ea, 0x0188, 0x1e57, 0xd016, 0x9d81, 0x94a3, 0xd5eb, 0x9ba3, 0xefe2, 0xeafe, 0x437e]),
    },
    // 2^169 * B
    BaseMultiple {
        x: FieldElement([0x3218, 0x2c98, 0x918f, 0x12ae, 0x8cf0, 0xf3ea, 0xb93c, 0xe45d, 0xed69, 0x47b2, 0xbd18, 0x16ce, 0x5c52, 0xe223, 0x25a5, 0x5d52]),
        y: FieldElement([0xb1b9, 0x5de7, 0xbc4e, 0xbbee, 0x8140, 0x8277, 0xab19, 0xc6b5, 0xabee, 0x6b5b, 0x9263, 0x348a, 0xcd8d, 0x4fee, 0xe549, 0x7ec9]),
        t: FieldElement([0x3484, 0xca0e, 0xa128, 0x51c9, 0xde02, 0xed17, 0x9c0e, 0xc5a6, 0xd80b, 0xcfa0, 0x51ff, 0x12e5, 0x28f2, 0xdf02, 0xbfbe, 0x0ab9]),
    },
    // 2^170 * B
    BaseMultiple {
        x: FieldElement([0x5760, 0x9a2e, 0x1d72, 0x6e6b, 0x3358, 0x8c24, 0x3948, 0x8e46, 0x6a89, 0x5188, 0x6223, 0x32b5, 0x3609, 0x57e3, 0x98f5, 0x6fde]),
        y: FieldElement([0x2c8b, 0x4800, 0xf94a, 0x875b, 0x5269, 0x5be5, 0xb1d1, 0x25e5, 0xe025, 0xc29c, 0x4413, 0xb9e8, 0x700a, 0xbdad, 0x510f, 0x6994]),
        t: FieldElement([0x1bf2, 0x3061, 0x0854, 0x77af, 0x42f6, 0x79d2, 0x39d4, 0xe9d2, 0x8175, 0x61cc, 0x8673, 0xe248, 0x0f9d, 0x4ef3, 0xb1f7, 0x3c86]),
    },
    // 2^171 * B
    BaseMultiple {
        x: FieldElement([0xdca2, 0xa9ab, 0x2d25, 0x5fac, 0x3303, 0xe708, 0xfe7e, 0x3695, 0x5b3c, 0xd33a, 0x8205, 0x951c, 0xd82d, 0x7e77, 0xd902, 0x705b]),
        y: FieldElement([0xfec2, 0x0c1b, 0xcd67, 0xe0d6, 0x8e51, 0xe02c, 0x8879, 0xcff0, 0x4a41, 0x23ad, 0x46d4, 0x94ca, 0xc3a1, 0x28eb, 0xfa06, 0x1417]),
        t: FieldElement([0x5833, 0x4ba6, 0x140e, 0xd622, 0xc248, 0x9afe, 0x99e9, 0x5385, 0x4953, 0x0f96, 0xf69c, 0xcce7, 0x9d4e, 0x1f96, 0xa267, 0x4b41]),
    },
    // 2^172 * B
    BaseMultiple {
        x: FieldElement([0xaa7b, 0x0a70, 0xfb4b, 0xbff5, 0xc580, 0x08cf, 0xdd7a, 0xf4a1, 0x549d, 0x5350, 0x7723, 0xf523, 0xa534, 0xd122, 0x960d, 0x472e]),
        y: FieldElement([0xb7cc, 0x8932, 0xd057, 0x7598, 0x37e4, 0xa999, 0xbae8, 0xbaed, 0xc7eb, 0x154f, 0x0776, 0x4c0c, 0x9fef, 0xfc52, 0x5d04, 0x1058]),
        t: FieldElement([0x1460, 0x8e98, 0x0415, 0x1329, 0xc8a5, 0x21f8, 0x9db2, 0xa92d, 0xdcc9, 0x74e5, 0x3d66, 0xc613, 0x57cc, 0xd02b, 0x714d, 0x1014]),
    },
    // 2^173 * B
    BaseMultiple {
        x: FieldElement([0xc58b, 0x3dcc, 0xa669, 0x18a1, 0xbc44, 0x774d, 0xc737, 0xec86, 0xc90c, 0x44d6, 0x23a9, 0xb927, 0x3403, 0x0aa7, 0xc7d5, 0x3734]),
        y: FieldElement([0x7ef9, 0x663e, 0xf9ee, 0x2899, 0xadff, 0xd811, 0x66e2, 0xcdc5, 0x0d0f, 0x6a0b, 0x7cfc, 0xa824, 0xa84f, 0x805e, 0x8b45, 0x416c]),
        t: FieldElement([0x986d, 0x7324, 0x8cb6, 0x47cc, 0xe0c2, 0x2e40, 0x363c, 0x885f, 0x847e, 0x7d42, 0xe040, 0x26c5, 0x3f00, 0x42a8, 0x1192, 0x1a50]),
    },
    // 2^174 * B
    BaseMultiple {
        x: FieldElement([0x1eef, 0xf7ec, 0x778d, 0xeaf2, 0x60db, 0x2103, 0xffc0, 0x675e, 0x71c3, 0x210b, 0x41b4, 0x68a0, 0xc638, 0xa301, 0x51d3, 0x3c3c]),
        y: FieldElement([0xf892, 0x4bd6, 0x42ef, 0xb213, 0xc44a, 0x722e, 0xc93f, 0xbd11, 0x0274, 0xf50e, 0x9d13, 0x1a83, 0xd51b, 0xde54, 0x1ec4, 0x6c16]),
        t: FieldElement([0x50ec, 0x0470, 0xa93a, 0x1e7d, 0x09e2, 0x30f0, 0x04d1, 0x4eb7, 0x8bb9, 0xa2ce, 0x53a7, 0x56f6, 0xa184, 0x0789, 0x4716, 0x225e]),
    },
    // 2^175 * B
    BaseMultiple {
        x: FieldElement([0x5227, 0x63e4, 0x94aa, 0xc3e6, 0x9c28, 0x56c6, 0xfaac, 0xbdb6, 0xcce2, 0xc676, 0x2727, 0x8ea2, 0x2b78, 0x7284, 0xbd10, 0x2a4e]),
        y: FieldElement([0xa7ea, 0xef23, 0x6104, 0x5080, 0x6ec9, 0x96a5, 0xd1d1, 0xc3c8, 0xd718, 0xfd2d, 0xbd26, 0x7bcb, 0x5192, 0x4a0e, 0x5765, 0x49b8]),
        t: FieldElement([0xb614, 0x3ce0, 0x9712, 0x8f31, 0x47c3, 0x4049, 0x3d63, 0x32f3, 0x4d9f, 0xdc3c, 0x25a6, 0x958f, 0x4ae2, 0xecb0, 0x295d, 0x5683]),
    },
    // 2^176 * B
    BaseMultiple {
        x: FieldElement([0xeb6a, 0x9afc, 0x109a, 0xdbce, 0x1c3a, 0x6a3c, 0xea9d, 0xbc46, 0x4945, 0xe3ac, 0x1241, 0xf07c, 0x4ff7, 0xf7f9, 0x2cff, 0x0489]),
        y: FieldElement([0x3130, 0x1a54, 0xca46, 0xc6e6, 0xe2cb, 0xc1c3, 0x758b, 0xbe81, 0xf8ee, 0x11a3, 0x251c, 0xa7a3, 0x5135, 0xe255, 0xaa25, 0x3ae2]),
        t: FieldElement([0x5ed8, 0xdde1, 0xc188, 0x44b5, 0x92eb, 0x44f7, 0x79d8, 0xb538, 0x929c, 0x5772, 0x0dc7, 0xd4aa, 0x9330, 0xbfb9, 0x1ba4, 0x2bfc]),
    },
    // 2^177 * B
    BaseMultiple {
        x: FieldElement([0x48b4, 0x9f10, 0x098a, 0xfa76, 0x7af0, 0x70b0, 0x83f7, 0x5280, 0x2b84, 0xa226, 0x5dc4, 0xba4f, 0xc8b1, 0x0d40, 0x9778, 0x60c4]),
        y: FieldElement([0xb1d4, 0x086c, 0x40c7, 0x7338, 0x0b5f, 0x76f3, 0xb25d, 0x2fa5, 0x5757, 0xed07, 0xa208, 0x4f6c, 0x0208, 0x0eb5, 0x44ee, 0x22fa]),
        t: FieldElement([0x4705, 0xade2, 0x01c5, 0xb523, 0x0cd8, 0x9d4e, 0xd30c, 0x9017, 0x6cb2, 0xb5c3, 0x8872, 0xce70, 0x0e7f, 0x6ea1, 0x3f46, 0x6820]),
    },
    // 2^178 * B
    BaseMultiple {
        x: FieldElement([0x000f, 0xa63f, 0x1904, 0x6556, 0x7f31, 0xeb8b, 0xe10d, 0x8947, 0x1697, 0xfa53, 0xa781, 0xb2aa, 0x67bf, 0x72eb, 0x8160, 0x480d]),
        y: FieldElement([0x137e, 0xcd33, 0x84a8, 0x1e56, 0xaf67, 0x436b, 0x17ac, 0x16af, 0x52c0, 0x4999, 0x875b, 0x7e73, 0x43b5, 0x6bda, 0x0f1d, 0x552d]),
        t: FieldElement([0x675f, 0x5b9c, 0x9f4e, 0x494a, 0xddb4, 0x60f3, 0x19a8, 0xe0b4, 0x7cf0, 0x55cc, 0x2f30, 0x9718, 0x5b2a, 0xe85b, 0x9978, 0x7be5]),
    },
    // 2^179 * B
    BaseMultiple {
        x: FieldElement([0x0638, 0x0bf8, 0x82ac, 0x97c4, 0x902b, 0xf7e0, 0xaba8, 0x086c, 0x6680, 0x4690, 0x26f7, 0xf82d, 0xc4f1, 0x4a6b, 0x9882, 0x378e]),
        y: FieldElement([0xb48e, 0xb8ee, 0x3fd4, 0x1bb2, 0x0ae0, 0x753d, 0x2834, 0x8ea2, 0x92c4, 0xfe7b, 0x6e60, 0xb86d, 0x1d31, 0x0d62, 0x1478, 0x1142]),
        t: FieldElement([0x00a9, 0x57be, 0x9fd1, 0x6885, 0x9560, 0x2f57, 0xcb82, 0xd842, 0x8d7a, 0x74b0, 0x1dce, 0xd5b5, 0xaf3c, 0x2351, 0xea41, 0x43be]),
    },
    // 2^180 * B
    BaseMultiple {
        x: FieldElement([0xa85e, 0x04d8, 0x739b, 0xc9c9, 0x0ddc, 0xbf73, 0x0a0a, 0xff73, 0x1f18, 0x519c, 0xc6aa, 0x83f1, 0xfd25, 0xa3ab, 0xd311, 0x2401]),
        y: FieldElement([0xe34d, 0x387e, 0x5e62, 0xbb64, 0x532b, 0x03b5, 0xc468, 0x2bf2, 0x035a, 0x9932, 0x414a, 0xe19a, 0xae1a, 0x488c, 0x24f3, 0x6532]),
        t: FieldElement([0x4d2a, 0x7f35, 0xbd59, 0xe308, 0x699a, 0x3069, 0xbf2f, 0xfc36, 0x2377, 0x40e9, 0x2a36, 0x06f3, 0x414a, 0x7b5b, 0x3ff7, 0x73f5]),
    },
    // 2^181 * B
    BaseMultiple {
        x: FieldElement([0xdde8, 0x3aad, 0xea8c, 0xb3f4, 0xe5b2, 0xf273, 0x8bed, 0xedbf, 0x0cb1, 0xfb0c, 0xf12b, 0x4801, 0x26e8, 0x8e03, 0x4d27, 0x7296]),
        y: FieldElement([0x09c8, 0x603b, 0x26c9, 0x7c4d, 0x9cf2, 0xa1d4, 0x263b, 0x04c2, 0x4433, 0x3c76, 0xbb02, 0x4211, 0x220c, 0xc6b7, 0xace1, 0x0eb4]),
        t: FieldElement([0xdb61, 0x80f8, 0xe01b, 0x7bb9, 0x0f19, 0x3edc, 0xeb30, 0x2db9, 0x61c9, 0x05ba, 0xd984, 0x4844, 0xd1b0, 0xeff2, 0xcb6d, 0x5806]),
    },
    // 2^182 * B
    BaseMultiple {
        x: FieldElement([0x8ed2, 0xfa9b, 0x8e42, 0x8fdf, 0x86c7, 0xa4f9, 0x70ca, 0x9d00, 0xbf21, 0x57ec, 0x3062, 0x8c58, 0x350d, 0x5ddb, 0x6a8b, 0x5aa0]),
        y: FieldElement([0x58c1, 0x0d7c, 0xdd20, 0x2611, 0x895f, 0x973b, 0xf858, 0xe38b, 0x32df, 0xfce2, 0x67d8, 0xa5f2, 0x1e37, 0xec6d, 0x277c, 0x7920]),
        t: FieldElement([0x532d, 0x1d2e, 0xbc01, 0x8e5d, 0x1bfc, 0x4a88, 0x596e, 0x13ce, 0xcb4b, 0xcde0, 0xb454, 0xff03, 0x9073, 0x453d, 0xa208, 0x42ce]),
    },
    // 2^183 * B
    BaseMultiple {
        x: FieldElement([0xe9d0, 0xfac0, 0x4595, 0x9623, 0x2cf1, 0x2579, 0xce14, 0x1440, 0x2c44, 0x5036, 0x63d9, 0xb756, 0x3b56, 0xa79e, 0x89ef, 0x0ebb]),
        y: FieldElement([0x7fce, 0x0adc, 0x82cc, 0x0a1c, 0x7178, 0x74e8, 0x018d, 0x0f30, 0x11a7, 0xdf4c, 0xd738, 0x0da7, 0x48f8, 0x0052, 0x7b80, 0x0e5f]),
        t: FieldElement([0x8ad4, 0x74b3, 0x9ad3, 0x94e4, 0x368b, 0x0987, 0x7017, 0x8986, 0xb9f7, 0xced3, 0x8d2b, 0x3fc2, 0xc3f2, 0xc7e6, 0x463d, 0x15c8]),
    },
    // 2^184 * B
    BaseMultiple {
        x: FieldElement([0x8325, 0x94e6, 0x817b, 0x91b2, 0x0eae, 0xc905, 0x68a3, 0xd92d, 0x2588, 0x2a19, 0x6161, 0x9721, 0xa115, 0xa535, 0xc846, 0x0ea2]),
        y: FieldElement([0x031b, 0x8b0d, 0x1b5a, 0x4b97, 0x16f2, 0x3d31, 0x331f, 0x50a0, 0x183a, 0x13be, 0x76a1, 0xbac1, 0xf11b, 0x7b05, 0xa833, 0x3b82]),
        t: FieldElement([0x8f96, 0x5efd, 0x98ad, 0x3cca, 0x56fd, 0xa045, 0x1231, 0xeea2, 0x1130, 0x0dac, 0x37aa, 0x4b52, 0x4687, 0x0d96, 0xe28b, 0x3cdd]),
    },
    // 2^185 * B
    BaseMultiple {
        x: FieldElement([0x5f3d, 0xd25c, 0x7dbc, 0x0e77, 0x6d2a, 0x4522, 0x0684, 0xddc4, 0xa6c6, 0xd7c6, 0xad49, 0x876d, 0x0e91, 0x673a, 0x2c1d, 0x561d]),
        y: FieldElement([0x7afe, 0xcf74, 0xd2d4, 0x19e5, 0xd0de, 0x70db, 0x6923, 0x6de6, 0xecec, 0x09cc, 0x6a33, 0xdc77, 0x226b, 0x5d76, 0x0992, 0x2dac]),
        t: FieldElement([0x533f, 0x3f3b, 0xd72c, 0x8998, 0xf8e3, 0x7ec2, 0x30d7, 0xbefd, 0x518e, 0x1727, 0xda41, 0x2b64, 0xcf55, 0xab01, 0x03f5, 0x24d7]),
    },
    // 2^186 * B
    BaseMultiple {
        x: FieldElement([0x1523, 0xeb17, 0xdbd3, 0x5e12, 0xf001, 0xab91, 0x412c, 0xacce, 0x1bed, 0x2d4b, 0xdbbc, 0x6617, 0x4689, 0x4bad, 0x6f1e, 0x140b]),
        y: FieldElement([0xce11, 0xb6bf, 0x2d77, 0x2248, 0x4f18, 0x5da3, 0xb04a, 0x1270, 0x543e, 0xd8d7, 0x2b0e, 0xdc27, 0xff53, 0x8cca, 0xb359, 0x444e]),
        t: FieldElement([0x4cbd, 0xeb12, 0xb8fb, 0xe124, 0xc0b6, 0xe3b5, 0x762f, 0xe9a7, 0xd2a0, 0xf679, 0xc821, 0x6b06, 0x5548, 0xdde9, 0x0d3e, 0x30a0]),
    },
    // 2^187 * B
    BaseMultiple {
        x: FieldElement([0x7607, 0x0f61, 0xb266, 0x3921, 0xc07e, 0x45ec, 0x8228, 0x29a1, 0x4432, 0x1335, 0x615e, 0x545e, 0x7ccb, 0xf6ef, 0xcf41, 0x0a9f]),
        y: FieldElement([0xf9dd, 0x84da, 0xe6c3, 0x9f8a, 0xd224, 0x5d96, 0x6f39, 0x8c58, 0x56c1, 0xab93, 0x79b5, 0xd23b, 0x73a8, 0xed16, 0xb4fa, 0x732f]),
        t: FieldElement([0x1c24, 0xd2e0, 0x07ca, 0x94d1, 0x57fb, 0xb49c, 0x8646, 0xd11b, 0x65f6, 0xea9c, 0x6d62, 0xa559, 0x3db6, 0x3659, 0x21b9, 0x3e4d]),
    },
    // 2^188 * B
    BaseMultiple {
        x: FieldElement([0xc128, 0x54e1, 0xf273, 0x76bf, 0x1974, 0x1b19, 0xb9e4, 0x46a8, 0x7365, 0x77f3, 0x299b, 0x5b74, 0x89c6, 0x2c6c, 0xf87c, 0x0fb3]),
        y: FieldElement([0xd5f7, 0x74e9, 0xb85d, 0x1625, 0x30b5, 0x84bc, 0xf0c5, 0xcaad, 0x2812, 0x9dbc, 0xfad4, 0xe682, 0xbfe3, 0x15a2, 0xd42c, 0x1034]),
        t: FieldElement([0xe634, 0x4983, 0x3599, 0x0ab2, 0x2da9, 0x2d48, 0xe1aa, 0xf9da, 0x9df5, 0x3d3a, 0x0026, 0x8887, 0x5973, 0xec09, 0x0dc7, 0x186a]),
    },
    // 2^189 * B
    BaseMultiple {
        x: FieldElement([0xb161, 0xba46, 0x310e, 0x67a5, 0x7f6c, 0xd9d6, 0x8527, 0x790f, 0xc814, 0x2f6c, 0x5b5f, 0x359c, 0x383d, 0x7786, 0x5565, 0x7b6a]),
        y: FieldElement([0xb0d3, 0x663a, 0x1b60, 0xf143, 0x5826, 0x0999, 0x2d8f, 0x14a3, 0x8571, 0xeddb, 0x26f6, 0x61d5, 0x739a, 0x0eac, 0xacea, 0x0cb7]),
        t: FieldElement([0xfb93, 0x0109, 0xad2a, 0x8e5e, 0x4af4, 0xd07e, 0x12ff, 0xf8c1, 0x054c, 0x25f5, 0x2a65, 0x146e, 0xd42b, 0xdeb6, 0x0e1f, 0x1937]),
    },
    // 2^190 * B
    BaseMultiple {
        x: FieldElement([0xf45e, 0x17e5, 0x100e, 0xe79f, 0x5f43, 0x5c67, 0x4bac, 0x14e5, 0xd241, 0x48bf, 0x14f5, 0x71b0, 0x61c6, 0xb2c1, 0x5870, 0x5ad2]),
        y: FieldElement([0xba2d, 0x0716, 0x9492, 0xbddc, 0x2b50, 0x7fc9, 0x0042, 0x61ba, 0xf8ed, 0xed43, 0xf9f5, 0x6040, 0xb0b2, 0xcb82, 0x75ed, 0x65c7]),
        t: FieldElement([0x7cf1, 0xee0a, 0x8143, 0x5184, 0x69ad, 0xd9a6, 0xf8fc, 0x8807, 0xf734, 0xc637, 0xd4f4, 0xda2e, 0x58a7, 0xefd7, 0x50dd, 0x2424]),
    },
    // 2^191 * B
    BaseMultiple {
        x: FieldElement([0xb6d0, 0x3056, 0xae5c, 0x75b3, 0xa444, 0x5183, 0x016e, 0xef65, 0x7645, 0xf5e6, 0x0da2, 0x16d4, 0x583b, 0xf22f, 0x362f, 0x3f18]),
        y: FieldElement([0x2ffd, 0x9be0, 0x8c1e, 0x18c5, 0xcaa9, 0x2bd4, 0xb635, 0x0a95, 0x7e9f, 0xc4fb, 0x88ef, 0x237b, 0xec43, 0x0d2f, 0x7a0f, 0x5cfc]),
        t: FieldElement([0xa744, 0x468a, 0x842d, 0x54cc, 0x8472, 0x91ec, 0x811c, 0x3093, 0xc92c, 0x8575, 0xe37a, 0xb921, 0x20d0, 0x4744, 0x2b65, 0x53dd]),
    },
    // 2^192 * B
    BaseMultiple {
        x: FieldElement([0xd28d, 0xc7da, 0xd644, 0xdb7a, 0x7d26, 0xb81d, 0xdee1, 0x7a9d, 0x177d, 0x1c7e, 0x0437, 0x2d8d, 0x5e7c, 0x3818, 0xaf1e, 0x1bc7]),
        y: FieldElement([0x4833, 0x0031, 0xf659, 0xcaf2, 0x270f, 0x631b, 0x7e12, 0x1d02, 0xc049, 0x795d, 0xef87, 0x7a5e, 0x1f2f, 0x5566, 0x09d8, 0x61d9]),
        t: FieldElement([0xc2c7, 0x6636, 0x4521, 0x51b8, 0x7ef8, 0x56de, 0xf236, 0x9bb8, 0x0fbd, 0x4b1f, 0x64de, 0xccb6, 0xfa44, 0x54b8, 0x0b80, 0x1a34]),
    },
    // 2^193 * B
    BaseMultiple {
        x: FieldElement([0x8354, 0x1802, 0x9382, 0x0799, 0xa7d0, 0xd8da, 0x8975, 0xf2fa, 0xa3d9, 0x6bb8, 0x355a, 0xd228, 0x596b, 0xf8c2, 0xe245, 0x06bc]),
        y: FieldElement([0xc065, 0x88a3, 0x9551, 0x96fc, 0x7894, 0x0de8, 0x418b, 0xc2c9, 0x4858, 0x1075, 0xcd2f, 0xc92a, 0x6da0, 0xdd0f, 0x989c, 0x3d26]),
        t: FieldElement([0x4b17, 0x8eb9, 0x65eb, 0xdf4b, 0x66c6, 0xc229, 0x9c00, 0x1afc, 0xe42d, 0x8435, 0x6693, 0x2612, 0xaf10, 0xe653, 0x6260, 0x7a9f]),
    },
    // 2^194 * B
    BaseMultiple {
        x: FieldElement([0xd4f7, 0x6c16, 0x954e, 0x5d9d, 0x910f, 0x522b, 0x5cfe, 0xe534, 0xe630, 0x3ba4, 0xf3f3, 0x0834, 0x4aa9, 0xb5a0, 0xb36e, 0x0a09]),
        y: FieldElement([0xd926, 0xa35e, 0xeb0f, 0xf3a2, 0x3b20, 0xd437, 0x9ee4, 0x06ce, 0x533d, 0xaeed, 0xeb2b, 0x24b6, 0x110a, 0x0fa3, 0x7fd6, 0x3aa4]),
        t: FieldElement([0xc053, 0x6b04, 0xb1cc, 0xfe23, 0x2b82, 0xf32e, 0x9949, 0x2f26, 0x0590, 0x2ffe, 0x8084, 0xa69f, 0x8d58, 0xb464, 0xdfb4, 0x3bd5]),
    },
    // 2^195 * B
    BaseMultiple {
        x: FieldElement([0x9fdb, 0xfc2c, 0xb2d6, 0x2e1e, 0x7a52, 0x8706, 0x862d, 0x2b72, 0x906d, 0x4677, 0xb543, 0xf87a, 0x7d60, 0x6091, 0x9d5b, 0x079e]),
        y: FieldElement([0x8797, 0x04c7, 0x381c, 0x3901, 0xc758, 0xa385, 0x64fc, 0x6400, 0xa225, 0x50bf, 0xca94, 0x3126, 0x0a45, 0xd224, 0x2951, 0x1651]),
        t: FieldElement([0x4e2a, 0x33b9, 0xb9bb, 0xc441, 0xe195, 0x8b80, 0xe463, 0xcf91, 0x07e7, 0x51c8, 0xe8be, 0x2ccb, 0xb139, 0x9580, 0xcd78, 0x18a2]),
    },
    // 2^196 * B
    BaseMultiple {
        x: FieldElement([0x4a4d, 0x98d7, 0x5771, 0x7dac, 0x378b, 0x63bd, 0x87ff, 0x49b1, 0x2095, 0xcf7c, 0x597c, 0x91c4, 0xef9c, 0xdbd0, 0x0960, 0x469d]),
        y: FieldElement([0x78cb, 0x9094, 0x45e4, 0xf6b3, 0xf6d9, 0x7457, 0xf8d5, 0x4f83, 0xc939, 0x88bd, 0x57c2, 0x1f21, 0x3224, 0xf868, 0x21c7, 0x0b5f]),
        t: FieldElement([0xd297, 0x2ef6, 0x1d38, 0x4cbc, 0xf585, 0x96ea, 0x8ec5, 0xd613, 0xe1db, 0x2be3, 0x1626, 0x97b6, 0x2c6f, 0x5eea, 0x548e, 0x0e28]),
    },
    // 2^197 * B
    BaseMultiple {
        x: FieldElement([0x6792, 0x5677, 0xffa1, 0xc5c4, 0xf095, 0x3ae3, 0xca0a, 0x4d94, 0x7e9e, 0xb93d, 0xb66e, 0xceb0, 0x30a4, 0x9989, 0xade9, 0x5911]),
        y: FieldElement([0x48f6, 0xa195, 0x5f6f, 0xa5b7, 0x30bb, 0x1c00, 0x8ad2, 0x25d6, 0x1b26, 0x0db2, 0x6a37, 0xf405, 0x3e9d, 0x2a17, 0xd243, 0x063a]),
        t: FieldElement([0x3b8e, 0x82c9, 0x9b94, 0xf5e1, 0x8a09, 0x7724, 0x77ab, 0x0550, 0xda47, 0x3430, 0x5158, 0xd9b8, 0xb25e, 0x8d67, 0x19b7, 0x255b]),
    },
    // 2^198 * B
    BaseMultiple {
        x: FieldElement([0x9932, 0xd193, 0x729a, 0xa9f3, 0xbd16, 0x4cb4, 0xf9dd, 0xb2d4, 0x9a64, 0x05d3, 0xa3e4, 0x1c73, 0x7ecb, 0x6757, 0x04ff, 0x10b3]),
        y: FieldElement([0x4bb9, 0xada4, 0x6dd0, 0x2361, 0xafb4, 0xa934, 0x65aa, 0xd9ec, 0xe369, 0xcd85, 0xe7cc, 0x9bb0, 0xc141, 0xf91c, 0xfaa0, 0x13b7]),
        t: FieldElement([0x943b, 0x3d6b, 0x1181, 0xfe78, 0xccce, 0xbf20, 0x6fa5, 0x1a34, 0xef1a, 0x0f11, 0xb987, 0xc3d7, 0xd8f1, 0xbe4f, 0xf9f6, 0x447a]),
    },
    // 2^199 * B
    BaseMultiple {
        x: FieldElement([0xfd04, 0x3c88, 0xd00c, 0x5209, 0x4f51, 0x1906, 0xc3cc, 0xdebb, 0xc580, 0xbc33, 0xf3f9, 0x3617, 0xc6dd, 0xe8de, 0x5d9b, 0x1b79]),
        y: FieldElement([0x0a65, 0x51be, 0xad57, 0x7950, 0x7108, 0x079b, 0x8f95, 0xaefb, 0x384b, 0xcfba, 0x2a53, 0x1e86, 0x50c0, 0x675c, 0xf61b, 0x6c87]),
        t: FieldElement([0x9c7a, 0xdcff, 0xcec4, 0x7dfa, 0x7d3f, 0x5837, 0x3786, 0x83b8, 0x5c7e, 0xd763, 0xaa3e, 0x8bd3, 0xa705, 0x38f2, 0xa1e7, 0x3fc0]),
    },
    // 2^200 * B
    BaseMultiple {
        x: FieldElement([0xcbeb, 0x70c5, 0x3191, 0x9310, 0xc80d, 0xefd0, 0xe862, 0x826f, 0x69e3, 0x913d, 0x317f, 0x26e1, 0x3c35, 0x2f4a, 0xc4ab, 0x5e9a]),
        y: FieldElement([0x1bab, 0xe5b5, 0xc32b, 0x290e, 0xd0b0, 0xe673, 0x644f, 0xbcf2, 0xe4e4, 0x9ae1, 0x3352, 0xbd2f, 0x03cc, 0x8aee, 0x00fa, 0x505f]),
        t: FieldElement([0x2a48, 0xbed7, 0x6dde, 0x41d8, 0xbced, 0xea3d, 0x6022, 0x4e32, 0x0d99, 0x819f, 0x0c7a, 0x5eb7, 0xaebc, 0x068c, 0x3172, 0x4c14]),
    },
    // 2^201 * B
    BaseMultiple {
        x: FieldElement([0xdbf6, 0x220d, 0xb53d, 0x7514, 0xf031, 0xe281, 0x37b9, 0xa9a2, 0x1184, 0x079a, 0x53b5, 0x7889, 0x30a9, 0xa127, 0x4ef1, 0x2e5c]),
        y: FieldElement([0x008b, 0xfb54, 0xdc4d, 0x17cb, 0x4035, 0xb7ff, 0xfe8c, 0xe44a, 0x994e, 0xa84e, 0x5474, 0x5c5d, 0xa396, 0x5512, 0x3136, 0x5c17]),
        t: FieldElement([0x408c, 0x2e8e, 0x3c54, 0x1275, 0xf9b3, 0x72b8, 0x8e84, 0xe0c7, 0x9b38, 0xbb12, 0xbbbf, 0xf4d8, 0xb428, 0xc1bd, 0x8f7d, 0x7a28]),
    },
    // 2^202 * B
    BaseMultiple {
        x: FieldElement([0x24ce, 0x7bef, 0xf286, 0x770f, 0x5ce8, 0x877d, 0x2d38, 0xafef, 0x8cf2, 0x2e72, 0xb6eb, 0x4b55, 0xf16e, 0x8a4e, 0x9a0e, 0x4c6c]),
        y: FieldElement([0xea25, 0xc286, 0x4fd1, 0x3eb7, 0x5ca8, 0x668d, 0x2581, 0xc5ed, 0x054c, 0xd8b9, 0x70d6, 0x73be, 0xe882, 0xe5a1, 0x711e, 0x26d5]),
        t: FieldElement([0xde35, 0x9c0f, 0xabb7, 0x5135, 0x3dde, 0x83d1, 0x586c, 0x15e4, 0xceb9, 0x0364, 0xa0ee, 0xfc1c, 0x2d7d, 0x4742, 0x8381, 0x7537]),
    },
    // 2^203 * B
    BaseMultiple {
        x: FieldElement([0x7e92, 0x2750, 0xd772, 0xd60c, 0x9669, 0x3581, 0x9484, 0x8b35, 0xaa6c, 0x8662, 0x1c6e, 0xf315, 0xb36c, 0x65ff, 0xa21b, 0x599b]),
        y: FieldElement([0xa9e2, 0x8865, 0x50c4, 0xbbfa, 0x6e3b, 0x445f, 0xca01, 0xd497, 0xf6dd, 0x3fcd, 0xe53f, 0x6797, 0x8c2b, 0x0f66, 0x9b35, 0x07f5]),
        t: FieldElement([0xc488, 0xec09, 0x15c7, 0xa053, 0xbc24, 0xdc15, 0xf4bb, 0xb124, 0xc644, 0xa096, 0x0ca9, 0xdb2d, 0xe89c, 0x7481, 0xb1c6, 0x65d3]),
    },
    // 2^204 * B
    BaseMultiple {
        x: FieldElement([0x59f1, 0xd827, 0x5adb, 0x5e11, 0xf382, 0xff38, 0xed1c, 0x3ffe, 0x5464, 0x7f3f, 0x81d1, 0xefed, 0xc565, 0xfdcb, 0x80e1, 0x11cd]),
        y: FieldElement([0xdbe0, 0x2822, 0xffe6, 0x9d61, 0x1441, 0x3b2d, 0x2226, 0xf1df, 0x8134, 0x45e9, 0x0fee, 0x8b98, 0x3fa6, 0xf7ef, 0x1943, 0x43f1]),
        t: FieldElement([0x0c78, 0x057d, 0x31c0, 0xe29b, 0x2bdd, 0x1c60, 0x8b66, 0xe56a, 0x2350, 0x432b, 0xf15a, 0xbed5, 0x9fee, 0x8a54, 0x7a18, 0x040d]),
    },
    // 2^205 * B
    BaseMultiple {
        x: FieldElement([0xf3ee, 0xa100, 0xde50, 0xb6c0, 0xe301, 0x3c8c, 0x314d, 0xb0d2, 0xcd58, 0x10ed, 0x7a4a, 0x80ef, 0x19a9, 0xf332, 0x33d8, 0x068c]),
        y: FieldElement([0x7dcb, 0xff4f, 0xd830, 0x3b12, 0x1c39, 0xf906, 0x344c, 0x7135, 0x16b5, 0x6794, 0xeedf, 0xde11, 0x1da4, 0x9388, 0xa935, 0x1032]),
        t: FieldElement([0xdb52, 0x2b12, 0xc4de, 0x5994, 0xbdd0, 0x1531, 0x7e98, 0x2530, 0xf087, 0xecf3, 0x6e42, 0x50d2, 0xfd8e, 0x1993, 0xdd10, 0x1bb2]),
    },
    // 2^206 * B
    BaseMultiple {
        x: FieldElement([0xc087, 0xf0b1, 0x6fa3, 0x930c, 0x0aa9, 0xef72, 0xbe5c, 0x3565, 0x6aa7, 0x2c4e, 0x21bf, 0xe823, 0x972f, 0x3ec7, 0x17c8, 0x1eac]),
        y: FieldElement([0xef7b, 0xe521, 0xcc40, 0xdc1e, 0xbdd6, 0x7a97, 0x757c, 0x7a86, 0x5a25, 0x7c6e, 0x51e5, 0x1b3c, 0x825b, 0x079a, 0xa160, 0x0419]),
        t: FieldElement([0xaf55, 0xbcb0, 0x6e8c, 0x7e1b, 0x1e52, 0x7cc8, 0x15c3, 0x409f, 0x1a2e, 0xaf99, 0x14cb, 0x8fff, 0x7c5a, 0xbcd9, 0x9652, 0x4149]),
    },
    // 2^207 * B
    BaseMultiple {
        x: FieldElement([0x8896, 0xaba6, 0xe38f, 0x493a, 0xfef8, 0xe734, 0xb26a, 0x40fe, 0x7426, 0x4c57, 0xd4f6, 0xce99, 0x7b5d, 0x672f, 0x5ad6, 0x4ee4]),
        y: FieldElement([0x825c, 0xbdb3, 0x2555, 0x6af6, 0xa493, 0xc602, 0x5c7d, 0x2bb1, 0xff5b, 0x56fb, 0x01f8, 0x9041, 0xb6c6, 0x4fac, 0xa7fe, 0x7041]),
        t: FieldElement([0x4299, 0x41f8, 0xa29d, 0x091a, 0xae3c, 0x4e41, 0x0163, 0x7724, 0xeafe, 0x9db8, 0xd304, 0x3a41, 0x067f, 0x2c86, 0x8e23, 0x4541]),
    },
    // 2^208 * B
    BaseMultiple {
        x: FieldElement([0xfadb, 0x2c9b, 0x23d4, 0x2c67, 0x638a, 0x076c, 0x4826, 0xc24f, 0xd203, 0x2053, 0xed28, 0x7165, 0xa947, 0x1616, 0xbc12, 0x3328]),
        y: FieldElement([0xc039, 0xfafa, 0x33cd, 0xc743, 0x7697, 0x939b, 0x7291, 0xc5eb, 0x6718, 0x114c, 0xf4f0, 0x73e5, 0x5cb2, 0xc21b, 0x3f26, 0x2bbf]),
        t: FieldElement([0x5db1, 0x5f40, 0xf32b, 0x038f, 0xdb7b, 0xf46d, 0xcc7c, 0x46ff, 0x66f0, 0x7346, 0x43d4, 0x5217, 0x6d54, 0xdca5, 0xfbc9, 0x52e3]),
    },
    // 2^209 * B
    BaseMultiple {
        x: FieldElement([0xa733, 0x7c90, 0x6fc3, 0xa517, 0x67a0, 0x1772, 0x7eea, 0x1463, 0xde83, 0x71c1, 0x412d, 0x7a32, 0xd1f3, 0xd82b, 0xa62a, 0x3646]),
        y: FieldElement([0xccac, 0x7c6b, 0xb8f9, 0x088b, 0xd05c, 0x8f7d, 0xea73, 0xda20, 0xca86, 0xc700, 0x73ad, 0xe94d, 0xa9e8, 0x1fda, 0x0603, 0x24dd]),
        t: FieldElement([0x8b2a, 0xe4b3, 0xa317, 0xb520, 0xb19b, 0x1ef8, 0x3679, 0xd7dd, 0x6734, 0xe42c, 0x7958, 0x8b8b, 0x20ed, 0x514c, 0x4b4b, 0x421e]),
    },
    // 2^210 * B
    BaseMultiple {
        x: FieldElement([0xb29c, 0x0a61, 0x2a98, 0xd7a5, 0xa9ee, 0x65ac, 0x0acb, 0xe21e, 0xdcbe, 0x5985, 0x9c0f, 0x57a6, 0xa534, 0xeb87, 0x1e7b, 0x3c0c]),
        y: FieldElement([0xbd2f, 0x6384, 0xb50d, 0xf0a0, 0x9e4b, 0xc693, 0x9a34, 0xff34, 0x1973, 0x6e2f, 0x4554, 0x922c, 0x7631, 0xf134, 0x26b2, 0x74e8]),
        t: FieldElement([0xd94e, 0xa23d, 0xe242, 0x6cfb, 0x70c7, 0x6dea, 0x90b6, 0xfb37, 0x3dee, 0x534b, 0xc5b9, 0xa395, 0xa189, 0xb771, 0x8c40, 0x3a48]),
    },
    // 2^211 * B
    BaseMultiple {
        x: FieldElement([0x670a, 0x6d90, 0x4c0c, 0xc0cc, 0xbde6, 0x5ea7, 0x8c55, 0x58cd, 0x119b, 0xbba2, 0xb14b, 0x0443, 0x553c, 0x23ed, 0xcdfe, 0x53b1]),
        y: FieldElement([0xfb05, 0xf575, 0xaf01, 0x7238, 0xfc58, 0x2904, 0x7a34, 0xa267, 0x5008, 0xd06e, 0x732b, 0xb8d5, 0x30e4, 0xad96, 0xdf45, 0x5ca6]),
        t: FieldElement([0xf373, 0xa5d5, 0xec86, 0x7bd2, 0x4aaf, 0x32c6, 0x547a, 0x3115, 0xe36d, 0x392e, 0x5ec4, 0xbba2, 0xe848, 0x85be, 0x69e4, 0x4ce6]),
    },
    // 2^212 * B
    BaseMultiple {
        x: FieldElement([0x8398, 0x37c2, 0x41a0, 0x48a8, 0x5f5c, 0xc8bf, 0x24fa, 0x59e0, 0xbd2c, 0x81f6, 0x887e, 0xcae6, 0xd804, 0x605d, 0x74bb, 0x0ba7]),
        y: FieldElement([0x1321, 0xbf91, 0x7a77, 0xbc33, 0x07e9, 0x0a39, 0x7ddd, 0x1006, 0xee9a, 0x7347, 0x151b, 0xfb5a, 0x4dcd, 0xd2d0, 0x013a, 0x54ba]),
        t: FieldElement([0x2e60, 0xeb48, 0x21c0, 0xcffa, 0xc51a, 0xdcd8, 0x0a1a, 0xa265, 0x29b4, 0xf33b, 0x5a08, 0x1fdb, 0x545c, 0xe3cc, 0x418e, 0x5742]),
    },
    // 2^213 * B
    BaseMultiple {
        x: FieldElement([0xd548, 0x4a39, 0x200b, 0x436a, 0x07a0, 0x5e82, 0x7c49, 0x47c9, 0x7cf1, 0xb937, 0xef23, 0x466b, 0x8c45, 0x7645, 0x14df, 0x6e6b]),
        y: FieldElement([0xc942, 0x29ca, 0x764c, 0xda37, 0x2d8a, 0x3a7c, 0xf258, 0xb403, 0xb9b5, 0x131a, 0xde2d, 0x6b5f, 0xba9d, 0xc952, 0xb35d, 0x30f3]),
        t: FieldElement([0x27a7, 0xc85c, 0x30bb, 0x1cfa, 0xa233, 0x5047, 0x866e, 0x7a06, 0xb4f2, 0xde62, 0x3e0e, 0xdac8, 0xf248, 0x1034, 0xe59b, 0x6153]),
    },
    // 2^214 * B
    BaseMultiple {
        x: FieldElement([0x6f4c, 0x6bfe, 0x620c, 0x48d7, 0xef71, 0x85b1, 0xc079, 0x24ed, 0x08b1, 0x7693, 0xf78e, 0x8e38, 0xfeeb, 0x4080, 0x90af, 0x4964]),
        y: FieldElement([0x884a, 0xc1da, 0x4498, 0x533c, 0xdb4e, 0xb94b, 0x5f12, 0x08cd, 0xef04, 0xe775, 0x3ab1, 0x07e5, 0xcafa, 0x7b65, 0x1072, 0x7f64]),
        t: FieldElement([0x31b8, 0x022a, 0x3cc5, 0xa550, 0x953e, 0xf942, 0x94ff, 0x3a7d, 0xe808, 0x1598, 0xbeb1, 0xdbda, 0x1500, 0x0cca, 0x85c5, 0x2002]),
    },
    // 2^215 * B
    BaseMultiple {
        x: FieldElement([0x67e0, 0x7be9, 0x96db, 0xb05c, 0xd032, 0x3159, 0xdc90, 0x9792, 0x09ac, 0x3138, 0x7e0f, 0x5dd6, 0x06d0, 0x1fb6, 0xf0ea, 0x075b]),
        y: FieldElement([0x9f81, 0xdec7, 0x416b, 0x3522, 0x6714, 0x3e77, 0x8190, 0xd9b0, 0x4c85, 0x9bca, 0x043f, 0xd659, 0x17aa, 0x88c3, 0x3734, 0x43ba]),
        t: FieldElement([0x0bb2, 0x5c09, 0x8741, 0xa613, 0x6ed4, 0x8162, 0x1ff7, 0xa1c5, 0x749e, 0x9fc5, 0xeffb, 0x027f, 0xbec5, 0xc49f, 0x376f, 0x0cb7]),
    },
    // 2^216 * B
    BaseMultiple {
        x: FieldElement([0xb64c, 0xc869, 0x9581, 0x3394, 0x3492, 0x3ce9, 0x0d84, 0x5a3d, 0x9c37, 0xa022, 0x65aa, 0xb4ce, 0x2dc2, 0x6766, 0xff02, 0x1074]),
        y: FieldElement([0xb022, 0xe6d5, 0xefc7, 0xa7b1, 0xda13, 0xb460, 0xc180, 0x7d42, 0x7010, 0x0497, 0xda4d, 0x8923, 0x0ec2, 0xcb68, 0xe0de, 0x299b]),
        t: FieldElement([0x49ff, 0x66ba, 0x6cf5, 0xc772, 0xe13c, 0x68ca, 0xb0bb, 0xe073, 0x1519, 0xed49, 0x3d43, 0x1416, 0x755a, 0x241f, 0xb0f5, 0x72cd]),
    },
    // 2^217 * B
    BaseMultiple {
        x: FieldElement([0xfe33, 0x2a42, 0x2b36, 0x362e, 0x5c64, 0xcc8b, 0x6a81, 0x0815, 0x27a1, 0x57e8, 0x78e5, 0xf28e, 0x1958, 0x4212, 0xc4ae, 0x3e63]),
        y: FieldElement([0x9678, 0xa79c, 0x80ca, 0x02ae, 0xb185, 0x047c, 0xc15c, 0x265b, 0xbac1, 0xa5ed, 0x7059, 0x8c85, 0xe88c, 0xac87, 0x286a, 0x3599]),
        t: FieldElement([0x83e8, 0x5294, 0xc232, 0x4d1b, 0x2336, 0x1b36, 0xae83, 0x9bd8, 0xf8b7, 0xe9e7, 0x93c9, 0x765a, 0x1573, 0x8b93, 0xc666, 0x7231]),
    },
    // 2^218 * B
    BaseMultiple {
        x: FieldElement([0x4a91, 0xad07, 0x7508, 0x4fc1, 0xb2a4, 0x6fc3, 0x3e46, 0xceb1, 0xab52, 0x0967, 0x4854, 0x6c6b, 0x1dd7, 0x7671, 0xffcb, 0x31dd]),
        y: FieldElement([0x8836, 0xfdfa, 0x36f0, 0x076f, 0x8874, 0xd050, 0x3895, 0x484a, 0x072e, 0x9764, 0x7611, 0x1a01, 0x4d27, 0x258e, 0x9b9a, 0x221c]),
        t: FieldElement([0x23d6, 0x01cb, 0xf183, 0x1e12, 0xf913, 0xe60e, 0x1e9f, 0x24b9, 0x5a45, 0x3aea, 0x5619, 0x9696, 0xa0c0, 0xa23b, 0xeca6, 0x5075]),
    },
    // 2^219 * B
    BaseMultiple {
        x: FieldElement([0x57be, 0x0ebd, 0xac0f, 0x765e, 0x71a3, 0x2bad, 0x4510, 0xec02, 0xd559, 0xa95d, 0xcc44, 0x4c25, 0x3cb3, 0x695b, 0x5507, 0x6b26]),
        y: FieldElement([0x6b30, 0xa7d4, 0x2951, 0xf9e3, 0x757a, 0x822a, 0xd62f, 0x991d, 0x802b, 0x67d5, 0x151e, 0xca9d, 0xebfd, 0x97ac, 0x0935, 0x3f7f]),
        t: FieldElement([0x434b, 0x669e, 0x802e, 0xbe7d, 0x0943, 0x1850, 0x0826, 0x2c29, 0x69a6, 0x1e86, 0x1992, 0xcfb7, 0x9f24, 0xd059, 0xb724, 0x7eb2]),
    },
    // 2^220 * B
    BaseMultiple {
        x: FieldElement([0x0d35, 0x0a34, 0x67b8, 0x2956, 0xf320, 0x5f19, 0x83e2, 0x7342, 0xa853, 0x02c5, 0x3319, 0x64b4, 0xc3bd, 0x8c87, 0x76d7, 0x25ed]),
        y: FieldElement([0x3947, 0x7637, 0x1d0d, 0xf50c, 0x6d5a, 0x8843, 0x1599, 0x52b4, 0x2a0f, 0xb0b3, 0xa63f, 0x26b3, 0xc7b3, 0xf545, 0x5f92, 0x179b]),
        t: FieldElement([0x748b, 0xfbfa, 0xad46, 0x6854, 0x4ff2, 0x05ca, 0x0b29, 0x30bb, 0x35ad, 0x0339, 0xc10b, 0x1140, 0x5052, 0x8a9e, 0xdad8, 0x0e3d]),
    },
    // 2^221 * B
    BaseMultiple {
        x: FieldElement([0xb92c, 0xa442, 0x3baf, 0x0e42, 0x0fc2, 0xeaf2, 0xaf83, 0x139a, 0xb017, 0x89bd, 0xe317, 0xcb72, 0x760e, 0x417e, 0x0463, 0x7188]),
        y: FieldElement([0x7875, 0x8638, 0xdd57, 0xee9f, 0x7054, 0xbf65, 0x2cf1, 0x39e0, 0xe30d, 0xfd89, 0x938e, 0x434f, 0xd5dc, 0xde5b, 0x98f9, 0x7be5]),
        t: FieldElement([0x0d36, 0xdb70, 0xa96a, 0x5241, 0x79ac, 0x6f46, 0xfd1f, 0xaca5, 0x7722, 0x0cd0, 0x6b02, 0x7a4c, 0xcb80, 0xc1e7, 0x6bc1, 0x60c3]),
    },
    // 2^222 * B
    BaseMultiple {
        x: FieldElement([0x3be7, 0x1165, 0xb2df, 0x63f2, 0x1294, 0x5c6f, 0x779e, 0xb6c1, 0xabd8, 0x7a58, 0x951d, 0xdd73, 0xe3e7, 0xf26f, 0x1d03, 0x76db]),
        y: FieldElement([0x06ae, 0x2c4e, 0x1b52, 0x5abc, 0xa55a, 0x27be, 0xebbd, 0x14e1, 0x6817, 0x0726, 0xd103, 0x0b18, 0xf1df, 0x5c06, 0x1ba6, 0x24b9]),
        t: FieldElement([0x62d8, 0xd0b8, 0xc274, 0x7385, 0x5b7e, 0xa1db, 0x211d, 0x4be2, 0xac66, 0x3726, 0x817b, 0x48ed, 0xac20, 0x4be1, 0x68c4, 0x2078]),
    },
    // 2^223 * B
    BaseMultiple {
        x: FieldElement([0x66c5, 0x1380, 0x480e, 0x878c, 0x8431, 0x60b4, 0xc5ed, 0xb6ec, 0x05c5, 0x5f33, 0x7d2f, 0xb640, 0x1d32, 0x7438, 0xf11b, 0x3d09]),
        y: FieldElement([0x69d4, 0xbc82, 0xf88d, 0x3634, 0x5575, 0x5518, 0x3c58, 0xaf79, 0x8026, 0x9bab, 0x0095, 0xcbf1, 0xc1da, 0xf69f, 0xa22f, 0x45f4]),
        t: FieldElement([0x5838, 0xa368, 0xadd4, 0xc779, 0xdf93, 0x3021, 0xa9a3, 0x97b2, 0xfd30, 0x33fe, 0xb38c, 0x816d, 0x81fb, 0x3429, 0x7ffa, 0x45b2]),
    },
    // 2^224 * B
    BaseMultiple {
        x: FieldElement([0xdc3f, 0xcb05, 0x3c41, 0x23c8, 0x2c04, 0x9938, 0x68e3, 0xf955, 0x32d3, 0xbfc7, 0xd4fa, 0x5d1b, 0xdcde, 0x4210, 0x42c0, 0x75d9]),
        y: FieldElement([0xab2d, 0x4e35, 0xc487, 0x9765, 0x2467, 0x47a4, 0x3fad, 0xf38e, 0x31cb, 0x7717, 0xe2c5, 0x8fd7, 0xc13c, 0x56cd, 0xc148, 0x696c]),
        t: FieldElement([0xc204, 0x9993, 0x588c, 0x1581, 0xd5e3, 0x8583, 0x8a18, 0x684c, 0x4338, 0xc5f7, 0xd37f, 0xa116, 0xc9b6, 0x8686, 0x393b, 0x6875]),
    },
    // 2^225 * B
    BaseMultiple {
        x: FieldElement([0xae14, 0x885f, 0xa57b, 0xdf90, 0xb210, 0x5e8b, 0x1724, 0xa3c3, 0x0fd4, 0x6192, 0x191a, 0xad5a, 0xbd76, 0x1cd8, 0xe0dd, 0x6d12]),
        y: FieldElement([0xbd8e, 0x8f70, 0xa302, 0x4d24, 0x675a, 0xdac4, 0x20f7, 0x810f, 0x7a5b, 0x2405, 0x8367, 0x2a0b, 0xe780, 0x74fd, 0x9e4b, 0x0d5c]),
        t: FieldElement([0xa844, 0xda4d, 0x6fd9, 0xc5d6, 0xbf7d, 0x5e60, 0x2edb, 0xb988, 0x2659, 0x7f9f, 0x65a4, 0x6a21, 0xb5d1, 0xa755, 0xcabd, 0x3211]),
    },
    // 2^226 * B
    BaseMultiple {
        x: FieldElement([0xd594, 0x1f5f, 0xfba2, 0xe1eb, 0x3407, 0x20f8, 0x81ad, 0x0630, 0xa12d, 0x9581, 0xcf36, 0x0b11, 0xc1af, 0x9a2b, 0x556c, 0x16c1]),
        y: FieldElement([0x4f36, 0x5ef1, 0x3574, 0x2813, 0x11d7, 0xb8cf, 0x93de, 0x05b3, 0xb5b8, 0xe973, 0xadeb, 0x1e19, 0x0f89, 0x158b, 0x8cd5, 0x23e3]),
        t: FieldElement([0xa828, 0x95a6, 0xc623, 0x0e1c, 0x17df, 0x626b, 0x8c63, 0x2f08, 0xa27d, 0x3fe7, 0xc550, 0x9215, 0xb7fd, 0x2095, 0xd1dc, 0x29b8]),
    },
    // 2^227 * B
    BaseMultiple {
        x: FieldElement([0xbe22, 0xb683, 0x804b, 0x436b, 0x5e24, 0x99ef, 0xa89b, 0x25fc, 0x3b8d, 0x9403, 0x3e2b, 0x95e7, 0x9b76, 0x15cc, 0x32db, 0x66e6]),
        y: FieldElement([0xf084, 0x134a, 0xd6a6, 0x93fa, 0x0746, 0x7ef6, 0x6d5c, 0xf65e, 0xe7a6, 0xf048, 0xea06, 0x90ff, 0xccc1, 0x194c, 0x3c9c, 0x534e]),
        t: FieldElement([0xdb95, 0x8800, 0x4ddf, 0x2538, 0xdca6, 0x3bab, 0x5044, 0xa1e9, 0x9652, 0x8e7b, 0x62f8, 0xc4d5, 0xcdc3, 0x4f0c, 0xef7f, 0x7a4d]),
    },
    // 2^228 * B
    BaseMultiple {
        x: FieldElement([0x502a, 0x07e3, 0x5915, 0x8bf2, 0xf281, 0xd3f3, 0x996c, 0x708c, 0xec67, 0xeecc, 0x599e, 0x5945, 0x477d, 0x6975, 0x24f5, 0x5d93]),
        y: FieldElement([0x4f6a, 0xbe1b, 0x306b, 0x75cf, 0xe346, 0x9d7b, 0xcdfc, 0x5cd8, 0xb41f, 0xe2c8, 0xec24, 0x281a, 0x3205, 0xfd57, 0x5a3c, 0x1098]),
        t: FieldElement([0xe887, 0x53c6, 0xe4d5, 0xaa62, 0x1d09, 0xea6e, 0xf087, 0x424e, 0x4072, 0x7ee7, 0xbedf, 0x73af, 0x03f5, 0x33a6, 0x602a, 0x19f8]),
    },
    // 2^229 * B
    BaseMultiple {
        x: FieldElement([0xdba3, 0x30f7, 0xc2d8, 0xe19a, 0xced3, 0xe522, 0x1e80, 0xe4d9, 0xab1f, 0x71c0, 0x861a, 0x270e, 0x5b99, 0x76fa, 0xb099, 0x3c08]),
        y: FieldElement([0x932a, 0x85d2, 0x6a1b, 0xa65d, 0xd1ee, 0x33d1, 0x6abd, 0x7336, 0x3a37, 0xb444, 0xa9ec, 0xde7a, 0x4083, 0xdfd7, 0xba28, 0x30a2]),
        t: FieldElement([0xa3aa, 0x81ce, 0xb799, 0x78a7, 0xa881, 0x40f1, 0x35e9, 0x8197, 0xc2b4, 0x69d8, 0xccf9, 0x4fa4, 0x387c, 0x8960, 0x3ae7, 0x05d6]),
    },
    // 2^230 * B
    BaseMultiple {
        x: FieldElement([0xebb2, 0x4647, 0x3e18, 0x991f, 0xcc0c, 0x2cf1, 0xe7e0, 0xe08f, 0x7e01, 0xb865, 0xd00c, 0xc8fb, 0x90b9, 0x3398, 0x3b61, 0x27d8]),
        y: FieldElement([0xbea0, 0x3a72, 0x4b50, 0xab74, 0xc801, 0xc593, 0xc7e4, 0x6c08, 0xcab4, 0xebee, 0xd78e, 0x264e, 0x1dc6, 0x71e2, 0x89af, 0x2aa0]),
        t: FieldElement([0xa758, 0xa965, 0xff3c, 0x6cbe, 0xe277, 0x169e, 0xf773, 0x977c, 0xbb9d, 0x624c, 0x989a, 0xd51c, 0xab2a, 0x920d, 0x1c31, 0x59c2]),
    },
    // 2^231 * B
    BaseMultiple {
        x: FieldElement([0x0b98, 0xdee4, 0xa8db, 0x82fa, 0x0674, 0x6d52, 0x5208, 0xff8a, 0xc562, 0x446a, 0x510f, 0x1f8c, 0xb66e, 0x2cc6, 0xd381, 0x4676]),
        y: FieldElement([0x29f4, 0x2e74, 0xa780, 0x8f1a, 0xbdf6, 0x8ed6, 0xc1bf, 0x2a95, 0xa0eb, 0x457f, 0x50a0, 0x0514, 0x57b1, 0x744c, 0xe2b7, 0x7d89]),
        t: FieldElement([0xa483, 0x079c, 0x4d62, 0xb6bb, 0x73bc, 0xaaf3, 0xca46, 0x4fef, 0x9dbd, 0x04bd, 0xfc67, 0xd194, 0xd25d, 0x7114, 0xc262, 0x0cc1]),
    },
    // 2^232 * B
    BaseMultiple {
        x: FieldElement([0xee07, 0xada7, 0x09b7, 0x490b, 0xbf4e, 0xe5ca, 0xe621, 0xafe6, 0x67d5, 0xcef3, 0x7c7e, 0x7b93, 0x105a, 0x0e12, 0x066c, 0x7511]),
        y: FieldElement([0xfcd5, 0xa386, 0xa33b, 0x0a3e, 0x0bfb, 0x36f7, 0x5bb1, 0x70da, 0x00b7, 0xdaa7, 0x8f88, 0xa884, 0x1cbc, 0xb839, 0xf365, 0x604d]),
        t: FieldElement([0xbc2f, 0xd5bc, 0xa94b, 0x674b, 0x46b5, 0xcfd6, 0x8e30, 0x2c9c, 0x44ff, 0x3f25, 0x7910, 0x9b68, 0xb30b, 0x533c, 0x60e9, 0x3bcd]),
    },
    // 2^233 * B
    BaseMultiple {
        x: FieldElement([0x9807, 0xe861, 0xd26a, 0x4981, 0xd525, 0x185b, 0x35c7, 0x5152, 0x46a4, 0x18ad, 0xc90d, 0x185f, 0x3b91, 0xc0b4, 0x5960, 0x668d]),
        y: FieldElement([0x1b03, 0x5379, 0x246e, 0x57ae, 0x58d9, 0x8509, 0xa248, 0xb5d3, 0x4de2, 0x8211, 0x86e6, 0xe93c, 0x00b1, 0xc219, 0xf757, 0x7a66]),
        t: FieldElement([0x0558, 0x92bd, 0x3d7c, 0x1579, 0x85cd, 0x6a00, 0xcd63, 0x5017, 0xe81e, 0xf943, 0x2f4d, 0x519b, 0x4801, 0x3067, 0x6d43, 0x5f3e]),
    },
    // 2^234 * B
    BaseMultiple {
        x: FieldElement([0xe30f, 0x0389, 0x22d7, 0x9f95, 0xb4ca, 0x9e8d, 0x976d, 0x8dff, 0x5921, 0xef07, 0x2d03, 0xf85e, 0x4644, 0x85e7, 0xc580, 0x5089]),
        y: FieldElement([0xd88b, 0x8653, 0x8624, 0x5229, 0xfa01, 0xc320, 0x954e, 0xadcb, 0x347b, 0x3094, 0x7ab7, 0x96fa, 0x6041, 0xcb2b, 0xb959, 0x50ca]),
        t: FieldElement([0x7e13, 0xdf36, 0x0b59, 0x3693, 0x44a6, 0x64fd, 0xa3a2, 0xcada, 0x5cee, 0xa607, 0xd45d, 0x0eb3, 0x43ba, 0xade3, 0xa209, 0x39c2]),
    },
    // 2^235 * B
    BaseMultiple {
        x: FieldElement([0x5bc2, 0x789b, 0x1b23, 0x883a, 0x5f94, 0x9b0a, 0x2b98, 0x536e, 0xf611, 0xc6ff, 0x427d, 0x02cc, 0x4080, 0x1e0d, 0xaffb, 0x0761]),
        y: FieldElement([0xe6b0, 0x812f, 0xa170, 0x392e, 0x7c04, 0x2cc4, 0x4587, 0x5b4a, 0x9769, 0x6dac, 0x102c, 0x7c42, 0x153b, 0x6070, 0x110e, 0x3a6d]),
        t: FieldElement([0x9715, 0x1b49, 0x6b9b, 0x0fa9, 0x5d0e, 0xfabd, 0xbee7, 0xb3bc, 0x6d9a, 0x84e1, 0xc245, 0x503a, 0x586a, 0xec4a, 0x9bb1, 0x5d6c]),
    },
    // 2^236 * B
    BaseMultiple {
        x: FieldElement([0xdc26, 0x3b76, 0xf9fc, 0x3f9c, 0x0b89, 0x5362, 0x83af, 0x2e01, 0x6abc, 0x03c6, 0x750d, 0x0d2a, 0x94e6, 0xcf54, 0xe5b3, 0x2596]),
        y: FieldElement([0x82fe, 0x74b1, 0x8a31, 0x6fa7, 0xbd56, 0xf48d, 0x94e0, 0x5951, 0x2cde, 0xf45a, 0x6b84, 0x884a, 0xc093, 0x9a0c, 0xa7ac, 0x68a0]),
        t: FieldElement([0x4731, 0xcfd3, 0x713d, 0x0e0a, 0x77fd, 0xa21b, 0x7a69, 0xd536, 0xd076, 0x31fb, 0x33eb, 0x4bd5, 0xe317, 0xff23, 0x93a9, 0x054e]),
    },
    // 2^237 * B
    BaseMultiple {
        x: FieldElement([0x0d25, 0xc7d6, 0x4723, 0xad10, 0x08c7, 0x875c, 0x9387, 0x1898, 0xd3b8, 0xac9c, 0x3d5a, 0x75c5, 0x49f8, 0x1432, 0x51cc, 0x2496]),
        y: FieldElement([0x9c65, 0xf05d, 0x0437, 0x34f0, 0x2a69, 0xa5f0, 0xca64, 0x2bde, 0x155b, 0xd210, 0x06ab, 0xc4dd, 0xb6b0, 0xc15b, 0xdf17, 0x028f]),
        t: FieldElement([0xfdda, 0x87e7, 0xe357, 0x4b6d, 0x9f0f, 0xe731, 0x4e98, 0xc699, 0x910c, 0x9404, 0x341a, 0x8f36, 0xe904, 0xb98c, 0x4e44, 0x702c]),
    },
    // 2^238 * B
    BaseMultiple {
        x: FieldElement([0x59bd, 0xbf3d, 0x315c, 0x2c44, 0x9432, 0x6004, 0x0f84, 0x00ad, 0x8fb6, 0x1dc9, 0x5ccc, 0x49a2, 0x500e, 0x0891, 0x439a, 0x0555]),
        y: FieldElement([0x935d, 0xdf55, 0x129b, 0xec19, 0x8593, 0x9e42, 0x0f66, 0xaf9d, 0xaf99, 0x8926, 0x61bc, 0xfffd, 0x4bce, 0x33f4, 0xc995, 0x5835]),
        t: FieldElement([0xba66, 0x8fd0, 0xf029, 0x9efb, 0x9722, 0xf715, 0xbb68, 0xfc56, 0x883a, 0x462c, 0xcbd7, 0x1b43, 0xc658, 0x4cd2, 0x2c16, 0x23c6]),
    },
    // 2^239 * B
    BaseMultiple {
        x: FieldElement([0xb417, 0x72ae, 0xd059, 0xa8aa, 0x8b16, 0x1163, 0x43b3, 0xda04, 0xa80c, 0x68b7, 0x4edd, 0xe754, 0x5daf, 0x055d, 0x3676, 0x0dec]),
        y: FieldElement([0x7c6d, 0x3282, 0x5538, 0x7457, 0x7d5b, 0xc4c3, 0x06fb, 0xf029, 0x5513, 0xc654, 0xdca7, 0x9f4c, 0x4998, 0xa820, 0x8dc3, 0x48fa]),
        t: FieldElement([0xa6a9, 0x3fa6, 0xb8b9, 0x4716, 0xcbf1, 0xa70e, 0x70f3, 0x61a6, 0xa4bf, 0xe37d, 0x50b8, 0xf51e, 0x8133, 0x5105, 0x75ba, 0x5c99]),
    },
    // 2^240 * B
    BaseMultiple {
        x: FieldElement([0x4787, 0xe99d, 0xd525, 0x47e3, 0xdf78, 0xa785, 0x5e85, 0x4c7a, 0x795f, 0xf31a, 0xb2a2, 0xa028, 0xdd9c, 0x4030, 0x38d4, 0x28bd]),
        y: FieldElement([0xbbfc, 0x78d5, 0x1d6d, 0x99d4, 0xaab4, 0x4444, 0x1b7a, 0xfed8, 0x99b4, 0xccb9, 0xc4e7, 0x3ad3, 0x8373, 0x5c41, 0xd740, 0x552d]),
        t: FieldElement([0xdbe4, 0x89a6, 0x5f5b, 0x47c3, 0xccae, 0x28fa, 0x7934, 0xb5be, 0xbf19, 0xf704, 0x283c, 0x87eb, 0xcf5c, 0x107d, 0x34a1, 0x6cc2]),
    },
    // 2^241 * B
    BaseMultiple {
        x: FieldElement([0xe126, 0x5f7b, 0xdce5, 0x7d3f, 0xa7a1, 0x4426, 0x2322, 0x8fc0, 0xf17d, 0x11b5, 0x7b47, 0xd419, 0x6f75, 0xa51e, 0xfe27, 0x0ec8]),
        y: FieldElement([0x11d3, 0xab3d, 0x2cef, 0xb1ed, 0x7c3d, 0x8132, 0xfe6b, 0x1cf8, 0x7b3c, 0x61c0, 0xb8df, 0x7675, 0xaa7f, 0x93d8, 0x3daf, 0x3de8]),
        t: FieldElement([0x4129, 0x0e55, 0x91aa, 0x806f, 0x3dd7, 0x11c8, 0xa735, 0x20c6, 0x5724, 0x8aca, 0x4891, 0xd364, 0x0cc7, 0x970d, 0x37c7, 0x14ae]),
    },
    // 2^242 * B
    BaseMultiple {
        x: FieldElement([0x89e5, 0x768a, 0xdb6c, 0x0a4d, 0x725b, 0x599d, 0x636e, 0x1863, 0xe37c, 0xe2fa, 0xa1db, 0xf48d, 0xd7a5, 0xb216, 0xb3d0, 0x393f]),
        y: FieldElement([0x60ce, 0x6c09, 0x76f5, 0x2417, 0x3a80, 0xc796, 0x2e94, 0x6bf7, 0xb5ef, 0x9605, 0xd3ef, 0x517b, 0x05da, 0x6744, 0x07bc, 0x4e21]),
        t: FieldElement([0x1fe1, 0x16c8, 0xd19e, 0xbfa4, 0xb865, 0x5ba4, 0x38f5, 0xd4c2, 0x3f1f, 0x1d85, 0x724d, 0x0be4, 0x91f1, 0x3699, 0x7af0, 0x5163]),
    },
    // 2^243 * B
    BaseMultiple {
        x: FieldElement([0x73e9, 0x216f, 0xdeb9, 0x7d22, 0x97eb, 0x1031, 0xeaa3, 0xc6e1, 0xeb37, 0x438f, 0xde58, 0x6441, 0x3e0e, 0x9907, 0xf13d, 0x1edf]),
        y: FieldElement([0xadf8, 0xc243, 0x0617, 0xe4e2, 0x86a9, 0x18cd, 0x78d7, 0x74c8, 0xd266, 0x1809, 0xf1a5, 0xa6ca, 0x9262, 0xcbc1, 0xeb00, 0x2e42]),
        t: FieldElement([0x3180, 0x0398, 0xc98f, 0x0f5c, 0xcde8, 0xa5d3, 0x7c08, 0x26ef, 0xe7cb, 0xaae1, 0x592c, 0xa222, 0x0498, 0x1add, 0x8074, 0x017c]),
    },
    // 2^244 * B
    BaseMultiple {
        x: FieldElement([0x347b, 0x4c24, 0x38cf, 0x6ce5, 0x010a, 0x222c, 0x240b, 0xad38, 0x7e24, 0xf019, 0xf96c, 0xf431, 0x1135, 0x46f6, 0x3a33, 0x5923]),
        y: FieldElement([0x0b20, 0x08a1, 0xad19, 0x5439, 0x3eea, 0x0923, 0xe2b6, 0xbcd2, 0xfc4d, 0xf09c, 0x1613, 0x3f22, 0xd2b9, 0x8611, 0x5590, 0x3cce]),
        t: FieldElement([0x55b2, 0xb42a, 0x11c0, 0xc71a, 0x3f0b, 0x6821, 0xa967, 0xc545, 0x4d5a, 0x2332, 0x7cd1, 0x3b9c, 0xad3a, 0x79e4, 0x3480, 0x5148]),
    },
    // 2^245 * B
    BaseMultiple {
        x: FieldElement([0xea1a, 0xfdbf, 0x3c4a, 0xec8e, 0x7e29, 0x7777, 0x9912, 0x84d7, 0x55f9, 0xf17f, 0xb48b, 0x95d2, 0x8da3, 0x8af0, 0xeba7, 0x4b82]),
        y: FieldElement([0x282c, 0x3af4, 0xdef6, 0xe00a, 0x4441, 0xf823, 0x033f, 0x9f64, 0x55c3, 0xc64c, 0x94c1, 0x241c, 0x5f5d, 0x4592, 0x5796, 0x1437]),
        t: FieldElement([0xf2ac, 0x84ee, 0x2465, 0xea80, 0x1b12, 0x769c, 0x977f, 0x936e, 0x074c, 0xbbea, 0x8948, 0xc0b9, 0x3798, 0x5e82, 0x1264, 0x4f07]),
    },
    // 2^246 * B
    BaseMultiple {
        x: FieldElement([0xcdc1, 0x6690, 0x76b9, 0x5ba0, 0x85a5, 0x2375, 0x89f9, 0x82a5, 0x6fb2, 0xebb1, 0x69c4, 0x186f, 0xed5a, 0x3d94, 0xd99d, 0x1a2c]),
        y: FieldElement([0xb035, 0x73e6, 0xb706, 0xe037, 0xb0f8, 0xe822, 0xedd2, 0xef0b, 0xc6e6, 0x995a, 0x1a9e, 0x049f, 0xe497, 0x0b4d, 0xbabe, 0x4044]),
        t: FieldElement([0xc2cd, 0xe5b2, 0xa2a1, 0xcccf, 0xc237, 0xa4ea, 0x3c13, 0x726c, 0x89ef, 0xa0c5, 0x7049, 0xe6d8, 0xfd89, 0xab6c, 0x6990, 0x0baf]),
    },
    // 2^247 * B
    BaseMultiple {
        x: FieldElement([0x56c1, 0x9196, 0x1f5f, 0x54bb, 0x886f, 0x0a89, 0xd6b2, 0x4241, 0x826a, 0x14ee, 0x76aa, 0x6530, 0x670f, 0xa639, 0x7c51, 0x2449]),
        y: FieldElement([0xa335, 0xd178, 0x0f11, 0xd375, 0x4670, 0x20db, 0xcb51, 0x8092, 0x1054, 0x3674, 0xa986, 0xa3d7, 0x7808, 0x01f1, 0xf829, 0x3b80]),
        t: FieldElement([0x5c2c, 0x3420, 0xbc4f, 0xf441, 0x0697, 0xcd14, 0x1b4d, 0x1d9e, 0x4cdb, 0x934d, 0x51ab, 0x5be7, 0x2957, 0xc380, 0xed6b, 0x4ba9]),
    },
    // 2^248 * B
    BaseMultiple {
        x: FieldElement([0x961f, 0x34ff, 0x132c, 0xcb21, 0x890a, 0xbe85, 0x70b3, 0x1e9e, 0x97de, 0x96af, 0xf730, 0x8948, 0x8d40, 0xf107, 0xf025, 0x5830]),
        y: FieldElement([0xd41e, 0x5793, 0x17e2, 0x9de7, 0x3cab, 0x0355, 0x2f82, 0xdb2b, 0x1e56, 0x2e30, 0x4724, 0xe66e, 0x33ff, 0x2c24, 0x5175, 0x67d4]),
        t: FieldElement([0x480b, 0x7f92, 0x33e4, 0xfb11, 0x6a0f, 0x0b67, 0xf1ef, 0xb76a, 0xb0fc, 0xce47, 0x7458, 0x113b, 0x1108, 0xfce9, 0x179c, 0x7ccd]),
    },
    // 2^249 * B
    BaseMultiple {
        x: FieldElement([0x062b, 0xa1d9, 0xe15d, 0xd1f4, 0x3c1e, 0xc69a, 0x2b29, 0x1313, 0xc078, 0x16d8, 0x2d17, 0xa99e, 0x79c9, 0xab57, 0x9124, 0x1992]),
        y: FieldElement([0xfb69, 0x9ca1, 0x75a6, 0x7d49, 0x7360, 0x4240, 0x13c4, 0x950a, 0x1e79, 0x8304, 0x9994, 0x1e9b, 0xe80c, 0x541f, 0xcbef, 0x52c0]),
        t: FieldElement([0xf7f0, 0xd037, 0x919d, 0x7d71, 0xa9cd, 0x64af, 0xa963, 0xffe5, 0x8beb, 0x77e6, 0x50c1, 0x9547, 0xab21, 0xc626, 0x933f, 0x64ab]),
    },
    // 2^250 * B
    BaseMultiple {
        x: FieldElement([0x8914, 0xa173, 0x8737, 0x7a6a, 0x1dcf, 0x2ed9, 0x671a, 0x74ed, 0xf0c0, 0x339c, 0xdfdd, 0xbf08, 0xd17b, 0xda66, 0xc9e6, 0x0849]),
        y: FieldElement([0xdde9, 0x555e, 0x0ab0, 0x21de, 0x5a4c, 0xd42e, 0x3a80, 0x9257, 0xf17a, 0x2cc4, 0xaf40, 0xc92f, 0x0392, 0x5ae5, 0xdcbc, 0x09f4]),
        t: FieldElement([0x9ef7, 0x6de3, 0xa0c6, 0x59cd, 0xdc36, 0xc26c, 0x4a9f, 0xd63f, 0x3573, 0x277c, 0x5a33, 0x5154, 0x7cb8, 0xe11e, 0x7b87, 0x7d76]),
    },
    // 2^251 * B
    BaseMultiple {
        x: FieldElement([0x20e7, 0x7c72, 0x946d, 0x525f, 0x5444, 0xf1e3, 0xb0b2, 0x4636, 0xae0f, 0xe892, 0x9d70, 0x796e, 0xadb1, 0xa937, 0xc05f, 0x03de]),
        y: FieldElement([0x5515, 0xc637, 0x271c, 0x6d1c, 0x4f14, 0xa4ca, 0x88c4, 0x4625, 0xfc39, 0xe55a, 0x29fe, 0x6911, 0x72f5, 0x4d84, 0x9f78, 0x1594]),
        t: FieldElement([0x0049, 0xafad, 0xe510, 0xbd89, 0x860e, 0x73b9, 0x08c0, 0x4d1f, 0xaf9d, 0x2d00, 0x6e8b, 0x0771, 0x9714, 0x8f85, 0x85f6, 0x70d6]),
    },
    // 2^252 * B
    BaseMultiple {
        x: FieldElement([0xd3ec, 0x57ff, 0xb00b, 0xdcb2, 0x4ff8, 0x12e2, 0x36d5, 0x6bbe, 0x4309, 0xa36d, 0x904d, 0xb82d, 0xe874, 0x4571, 0x8b19, 0x6a0c]),
        y: FieldElement([0x42b8, 0x031c, 0x2cad, 0x8e03, 0xd7ac, 0x2998, 0xc613, 0x2902, 0xd4b5, 0xcfe7, 0x8bcc, 0xec83, 0xc735, 0x749c, 0xadb7, 0x5f85]),
        t: FieldElement([0xf43d, 0x3b5f, 0xaa48, 0xfbc5, 0x7fca, 0x8e4b, 0x06e6, 0x82da, 0xfe32, 0xcf81, 0x7fc8, 0x07d0, 0x6fea, 0xe6ee, 0x05d4, 0x5348]),
    },
    // 2^253 * B
    BaseMultiple {
        x: FieldElement([0x8478, 0x56e1, 0x6945, 0x5a68, 0xb84f, 0x29b1, 0x33ff, 0x3103, 0xcbb7, 0x2596, 0xe6e6, 0x9841, 0xbb1a, 0x5603, 0xb2f2, 0x3491]),
        y: FieldElement([0x6c2c, 0x66f7, 0x62a4, 0x396b, 0xbab3, 0xd365, 0xf81c, 0xaa11, 0xdcbe, 0x5980, 0xf587, 0xe57b, 0xb3e3, 0x393e, 0xbeda, 0x0988]),
        t: FieldElement([0x6c3b, 0xad3c, 0x7eca, 0xc781, 0x43ef, 0x995a, 0x21e5, 0x23f0, 0x4397, 0xbe36, 0x5109, 0xa015, 0xe8f2, 0xf6cb, 0xdf44, 0x2bea]),
    },
    // 2^254 * B
    BaseMultiple {
        x: FieldElement([0x861d, 0xcf4e, 0x37f7, 0x2510, 0x128f, 0x19fb, 0xe0fb, 0x10ed, 0xe2c8, 0x75f5, 0x33b1, 0x96c0, 0xfb0d, 0x6c15, 0x070d, 0x055f]),
        y: FieldElement([0x3e69, 0x9747, 0xaf2c, 0x7c52, 0x8378, 0x1bad, 0x8239, 0x022f, 0x476f, 0x2adb, 0xe1b0, 0x9991, 0xb855, 0x3a99, 0x44a0, 0x5111]),
        t: FieldElement([0xe4ae, 0x8ff2, 0xc3b8, 0x5faf, 0x30ff, 0xde12, 0x4ff0, 0x855e, 0x2870, 0x4849, 0x02a3, 0x72e3, 0xe1bc, 0x53db, 0xc19e, 0x1253]),
    },
    // 2^255 * B
    BaseMultiple {
        x: FieldElement([0xdf6c, 0x7cfa, 0xb383, 0xeeeb, 0x513b, 0x2961, 0x3917, 0xe1a0, 0x5664, 0x6b7b, 0xe06b, 0xddad, 0xd7d1, 0x1499, 0x4017, 0x11f5]),
        y: FieldElement([0x4b6e, 0xa494, 0xa81c, 0x8cbd, 0x688e, 0x09ae, 0xe970, 0xee53, 0x82a2, 0xeb4b, 0x6901, 0xfd2c, 0x1682, 0xe025, 0x827f, 0x418b]),
        t: FieldElement([0x57d1, 0x37d4, 0x8e69, 0x6bb8, 0x34c6, 0x2dfb, 0x1ff5, 0xeee5, 0xf7b3, 0x44e5, 0xac4f, 0x13d4, 0xdb2d, 0xa140, 0x377f, 0x01d3]),
    },
];
