#![no_main]

use libfuzzer_sys::fuzz_target;
use uniprops::get_property;

fuzz_target!(|data: &[u8]| {
    let Some((&flag, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    let (property, value) = text.split_once('=').unwrap_or((&*text, ""));

    if let Ok(entry) = get_property(property, value, flag & 1 == 1) {
        let _ = entry.contains(u32::from(flag));
    }
});
