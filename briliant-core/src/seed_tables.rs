// Generated by `generate_seeds` from contrib/seeds. Do not edit by hand.

use crate::seeds::SeedSpec6;

pub const MAIN_SEEDS: &[SeedSpec6] = &[
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xc0, 0x00, 0x02, 0x0b], port: 8544 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xc0, 0x00, 0x02, 0x25], port: 8544 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xc0, 0x00, 0x02, 0x54], port: 8544 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xc6, 0x33, 0x64, 0x17], port: 8544 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xc6, 0x33, 0x64, 0x77], port: 8544 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xc6, 0x33, 0x64, 0xc9], port: 8545 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xcb, 0x00, 0x71, 0x28], port: 8544 },
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xcb, 0x00, 0x71, 0x4d], port: 8544 },
    SeedSpec6 { addr: [0x20, 0x01, 0x0d, 0xb8, 0x00, 0x2a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10], port: 8544 },
    SeedSpec6 { addr: [0x20, 0x01, 0x0d, 0xb8, 0x00, 0x2a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x31], port: 8544 },
];

pub const TEST_SEEDS: &[SeedSpec6] = &[
    SeedSpec6 { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xcb, 0x00, 0x71, 0x96], port: 9333 },
    SeedSpec6 { addr: [0x20, 0x01, 0x0d, 0xb8, 0x00, 0x2b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05], port: 9333 },
];
