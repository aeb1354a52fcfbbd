#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let bases = [b'A', b'C', b'G', b'T'];
    let seq: Vec<u8> = data.iter().map(|&b| bases[(b % 4) as usize]).collect();
    let rc = dnahash_seq::reverse_complement(&seq).unwrap();
    for width in [2, 4, 8, 16] {
        assert_eq!(
            dnahash_seq::hash_dna(&seq, width).unwrap(),
            dnahash_seq::hash_dna(&rc, width).unwrap()
        );
    }
});
