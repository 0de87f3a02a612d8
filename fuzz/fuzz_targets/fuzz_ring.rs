#![no_main]
//! Differential fuzzing of `ByteRing` against a `VecDeque<u8>` model.
//!
//! Decodes an arbitrary operation sequence, applies it to both the ring and
//! a growable deque with explicit FIFO eviction, and asserts that every
//! observable (returned counts, copied bytes, contents, the overwritten
//! flag, search results) agrees after each step.

use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use bytering::ByteRing;

#[derive(Debug, Arbitrary)]
enum Op {
    Write(Vec<u8>),
    Read(u16),
    Discard(u16),
    Overwritten,
    Search(Vec<u8>),
    Get(u16),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Plan {
    capacity: u8,
    ops: Vec<Op>,
}

fn model_write(data: &mut VecDeque<u8>, cap: usize, overwritten: &mut bool, input: &[u8]) -> usize {
    if input.is_empty() {
        return 0;
    }
    if input.len() > cap {
        *overwritten = !data.is_empty();
        *data = input[input.len() - cap..].iter().copied().collect();
        return cap;
    }
    data.extend(input);
    while data.len() > cap {
        data.pop_front();
        *overwritten = true;
    }
    input.len()
}

fn model_search(data: &VecDeque<u8>, needle: &[u8]) -> Option<usize> {
    if needle.len() > data.len() {
        return None;
    }
    let bytes: Vec<u8> = data.iter().copied().collect();
    (0..=bytes.len() - needle.len()).find(|&i| &bytes[i..i + needle.len()] == needle)
}

fuzz_target!(|plan: Plan| {
    let cap = usize::from(plan.capacity);
    let mut ring = ByteRing::new(cap);
    let mut model: VecDeque<u8> = VecDeque::new();
    let mut overwritten = false;

    for op in &plan.ops {
        match op {
            Op::Write(data) => {
                let accepted = ring.write(data);
                assert_eq!(accepted, model_write(&mut model, cap, &mut overwritten, data));
            }
            Op::Read(n) => {
                let n = usize::from(*n);
                let mut out = vec![0u8; n];
                let got = ring.read(&mut out);
                overwritten = false;
                let want = n.min(model.len());
                let expected: Vec<u8> = model.drain(..want).collect();
                assert_eq!(got, want);
                assert_eq!(&out[..got], &expected[..]);
            }
            Op::Discard(n) => {
                let n = usize::from(*n);
                let got = ring.discard(n);
                overwritten = false;
                let want = n.min(model.len());
                model.drain(..want);
                assert_eq!(got, want);
            }
            Op::Overwritten => {
                assert_eq!(ring.overwritten(), overwritten);
                overwritten = false;
            }
            Op::Search(needle) => {
                assert_eq!(ring.search(needle), model_search(&model, needle));
            }
            Op::Get(i) => {
                let i = usize::from(*i);
                assert_eq!(ring.get(i), model.get(i));
            }
            Op::Clear => {
                ring.clear();
                model.clear();
                overwritten = false;
            }
        }

        assert_eq!(ring.capacity(), cap);
        assert_eq!(ring.available(), model.len());
        assert_eq!(ring.available() + ring.free(), ring.capacity());
        assert!(ring.iter().eq(model.iter()));
    }
});
