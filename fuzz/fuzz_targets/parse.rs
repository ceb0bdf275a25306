#![no_main]

use libfuzzer_sys::fuzz_target;

use credo_message::MessageBuilder;
use credo_parser::Parser;

// Fuzz target: full parser entry point on arbitrary bytes.
//
// Calls Parser::parse + finish with the stock MessageBuilder and the
// default 1024-byte / depth-8 limits. Catches bugs in:
// - Field tag decoding and wire-type dispatch
// - Length-prefix extraction and truncation detection
// - Nesting stack push/pop balance
// - Limit enforcement on adversarial nesting
fuzz_target!(|data: &[u8]| {
    let mut parser = Parser::new(MessageBuilder::new());
    if parser.parse(data).is_ok() {
        let _ = parser.finish();
    }
});
