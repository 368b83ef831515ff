//! Request-scoped attributes injected into every log line
//!
//! Run with: cargo run -p ambient-log --example request_context

use ambient_log::prelude::*;
use ambient_log::{Config, JsonLogger};

fn handle(logger: &ContextualLogger, ctx: &Context, item: u32) {
    logger.debug(ctx, "Loading item", attrs![item = item]);
    if item % 2 == 0 {
        logger.info(ctx, "Item ready", attrs![item = item, cached = true]);
    } else {
        logger.warn(ctx, "Item rebuilt", attrs![item = item]);
    }
}

fn main() {
    let logger = LoggerBuilder::from_config(Config::development())
        .keys(["userID", "requestID"])
        .build();

    for (n, user) in ["42069", "1337"].into_iter().enumerate() {
        let ctx = Context::background()
            .with_value("userID", user)
            .with_value("requestID", format!("req-{n}"));
        for item in 0..3 {
            handle(&logger, &ctx, item);
        }
        logger.error(&ctx, "Request failed", attrs![errorCode = 500]);
    }

    // no declared keys, errors only
    let quiet = ContextualLogger::build(
        Vec::<String>::new(),
        Some(std::sync::Arc::new(
            JsonLogger::from_config(&Config::default()).with_level(Level::Error),
        )),
    );
    quiet.info(&Context::background(), "never shown", Vec::new());
}
