#![no_main]
use libfuzzer_sys::fuzz_target;

use args_decoder::{ArgumentsDecoder, Calldata, Scratch};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    // first 8 bytes pick the offset; the high bit folds it near usize::MAX
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[..8]);
    let pick = u64::from_le_bytes(raw) as usize;
    let off = if pick & (1 << 31) != 0 { usize::MAX - (pick & 0xFF) } else { pick & 0xFF };
    let body = &data[8..];

    let mut scratch = body.to_vec();
    let c = Calldata::new(body);
    let s = Scratch::new(&mut scratch);

    let w = c.decode_word_at(off);
    assert_eq!(w, s.decode_word_at(off), "word parity");
    assert_eq!(w.is_ok(), off.checked_add(32).map_or(false, |e| e <= body.len()));

    let sel = c.decode_selector_at(off);
    assert_eq!(sel, s.decode_selector_at(off), "selector parity");
    assert_eq!(sel.is_ok(), off.checked_add(4).map_or(false, |e| e <= body.len()));

    match c.decode_tail_at(off) {
        Ok(t) => {
            assert_eq!(t.len(), body.len() - off);
            assert_eq!(Ok(t), s.decode_tail_at(off));
        }
        Err(_) => assert!(off > body.len()),
    }

    assert_eq!(c.decode_word_exact(), s.decode_word_exact());
    assert_eq!(c.decode_bool_exact(), s.decode_bool_exact());
    assert_eq!(c.decode_identifier_and_tail(), s.decode_identifier_and_tail());
});
