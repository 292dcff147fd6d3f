use clap::Parser;

/// Prints four reduction totals: cheap product prices, coupons counted from
/// 0, coupons counted from 3, and coupons counted with `Iterator::fold`.
///
/// Takes no options. Set `LOG_LEVEL` or `RUST_LOG` to see logs on stderr.
#[derive(Parser, Debug)]
#[command(name = "coupon-reduce")]
#[command(about = "Hand-written reduce over products and coupon locations")]
#[command(version)]
pub struct Args {}
