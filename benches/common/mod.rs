#![allow(dead_code)]

use clmm_discovery_math::{
    Address,
    codec::{decode_pool_config, encode_pool_config},
    discovery::{
        MarketContext, PoolShape, analyze_target_market_cap, build_clanker_positions,
        build_discovery_config,
    },
    math::{
        format::{format_rational, format_usd_from_rational},
        math_helpers::sqrt_floor,
        tick_math::{snap_tick, sqrt_ratio_at_tick, tick_at_sqrt_ratio},
    },
    price::{convert_tick_quote, target_sqrt_price_x96_from_market_cap, usd_to_fixed},
};
use criterion::Criterion;
use num_bigint::{BigInt, BigUint};
use std::hint::black_box;

pub fn bench_math_helpers(c: &mut Criterion) {
    let n: BigUint = BigUint::from(1u8) << 384u32;
    let odd = &n - 12_345u32;
    c.bench_function("sqrt_floor_384_bits", |b| b.iter(|| sqrt_floor(black_box(&odd))));
}

pub fn bench_tick_math(c: &mut Criterion) {
    c.bench_function("sqrt_ratio_at_tick", |b| {
        b.iter(|| sqrt_ratio_at_tick(black_box(-200_311)).unwrap())
    });
    let sqrt_price = sqrt_ratio_at_tick(-200_311).unwrap();
    c.bench_function("tick_at_sqrt_ratio", |b| {
        b.iter(|| tick_at_sqrt_ratio(black_box(&sqrt_price)).unwrap())
    });
    c.bench_function("snap_tick", |b| {
        b.iter(|| snap_tick(black_box(-200_311), black_box(200)).unwrap())
    });
}

pub fn bench_format(c: &mut Criterion) {
    let numerator = BigInt::from(123_456_789_012_345u64);
    let denominator = BigInt::from(1_000_000_007u64);
    c.bench_function("format_rational", |b| {
        b.iter(|| format_rational(black_box(&numerator), black_box(&denominator), 18))
    });
    c.bench_function("format_usd_from_rational", |b| {
        b.iter(|| format_usd_from_rational(black_box(&numerator), black_box(&denominator)))
    });
}

pub fn bench_price(c: &mut Criterion) {
    let market = MarketContext::content_coin(2_500.0).unwrap();
    let fdv = usd_to_fixed("fdv", 25_000.0).unwrap();
    c.bench_function("target_sqrt_price_x96_from_market_cap", |b| {
        b.iter(|| {
            target_sqrt_price_x96_from_market_cap(
                black_box(&market.total_supply),
                18,
                black_box(&fdv),
                18,
                &market.quote_token_usd,
                18,
                true,
            )
            .unwrap()
        })
    });
    c.bench_function("convert_tick_quote", |b| {
        b.iter(|| convert_tick_quote(black_box(-200_000), 3_000.0, 1.0, 200).unwrap())
    });
}

pub fn bench_discovery(c: &mut Criterion) {
    let market = MarketContext::content_coin(2_500.0).unwrap();
    c.bench_function("build_discovery_config_content", |b| {
        b.iter(|| {
            build_discovery_config(Address::ZERO, black_box(25_000.0), PoolShape::Content, &market)
                .unwrap()
        })
    });

    let clanker = MarketContext::clanker_token(3_000.0).unwrap();
    c.bench_function("build_clanker_positions", |b| {
        b.iter(|| build_clanker_positions(black_box(30_000.0), &clanker).unwrap())
    });

    let config =
        build_discovery_config(Address::ZERO, 25_000.0, PoolShape::Content, &market).unwrap();
    c.bench_function("analyze_target_market_cap", |b| {
        b.iter(|| analyze_target_market_cap(black_box(60_000.0), &config, &market).unwrap())
    });
}

pub fn bench_codec(c: &mut Criterion) {
    let market = MarketContext::content_coin(2_500.0).unwrap();
    let config =
        build_discovery_config(Address::ZERO, 25_000.0, PoolShape::Content, &market).unwrap();
    let bytes = encode_pool_config(&config).unwrap();
    c.bench_function("encode_pool_config", |b| {
        b.iter(|| encode_pool_config(black_box(&config)).unwrap())
    });
    c.bench_function("decode_pool_config", |b| {
        b.iter(|| decode_pool_config(black_box(&bytes)).unwrap())
    });
}
