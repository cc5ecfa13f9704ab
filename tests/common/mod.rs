#![allow(dead_code)]

use aristocrat::corpus::count_ngrams;
use aristocrat::scorer::FrequencyModel;
use std::sync::OnceLock;

/// Public-domain openings used as a miniature training corpus.
pub const ENGLISH_PASSAGE: &str = "\
It was the best of times, it was the worst of times, it was the age of wisdom, \
it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness, it was \
the spring of hope, it was the winter of despair, we had everything before us, \
we had nothing before us, we were all going direct to Heaven, we were all going \
direct the other way. In short, the period was so far like the present period, \
that some of its noisiest authorities insisted on its being received, for good \
or for evil, in the superlative degree of comparison only. \
Call me Ishmael. Some years ago, never mind how long precisely, having little \
or no money in my purse, and nothing particular to interest me on shore, I \
thought I would sail about a little and see the watery part of the world. It is \
a way I have of driving off the spleen and regulating the circulation. Whenever \
I find myself growing grim about the mouth; whenever it is a damp, drizzly \
November in my soul; whenever I find myself involuntarily pausing before coffin \
warehouses, and bringing up the rear of every funeral I meet; then, I account it \
high time to get to sea as soon as I can. \
Four score and seven years ago our fathers brought forth on this continent, a \
new nation, conceived in Liberty, and dedicated to the proposition that all men \
are created equal. Now we are engaged in a great civil war, testing whether that \
nation, or any nation so conceived and so dedicated, can long endure. We are met \
on a great battle-field of that war. We have come to dedicate a portion of that \
field, as a final resting place for those who here gave their lives that that \
nation might live. It is altogether fitting and proper that we should do this. \
It is a truth universally acknowledged, that a single man in possession of a \
good fortune, must be in want of a wife. However little known the feelings or \
views of such a man may be on his first entering a neighbourhood, this truth is \
so well fixed in the minds of the surrounding families, that he is considered \
the rightful property of some one or other of their daughters.";

pub fn english_model(ngram_len: usize) -> FrequencyModel {
    FrequencyModel::from_counts(count_ngrams(ENGLISH_PASSAGE, ngram_len), ngram_len)
        .expect("passage yields n-grams")
}

/// Quadgram model over the passage, built once per test binary.
pub fn shared_english_model() -> &'static FrequencyModel {
    static MODEL: OnceLock<FrequencyModel> = OnceLock::new();
    MODEL.get_or_init(|| english_model(4))
}

/// Every quadgram, weighted by how closely it matches a rotation of `ABCD`,
/// with `ABCD` itself on top. Any partial decryption of a repeated
/// four-letter word has a strictly better neighbour until a rotation is hit.
pub fn abcd_model() -> FrequencyModel {
    const ROTATIONS: [&[u8; 4]; 4] = [b"ABCD", b"BCDA", b"CDAB", b"DABC"];
    let space = 26usize.pow(4);

    let records = (0..space).map(|code| {
        let seq: [u8; 4] = [
            b'A' + (code / 17576) as u8,
            b'A' + (code / 676 % 26) as u8,
            b'A' + (code / 26 % 26) as u8,
            b'A' + (code % 26) as u8,
        ];
        let matches = ROTATIONS
            .iter()
            .map(|rot| rot.iter().zip(seq.iter()).filter(|(a, b)| a == b).count())
            .max()
            .unwrap_or(0);
        let mut count = 10u64.pow(matches as u32);
        if &seq == b"ABCD" {
            count *= 2;
        }
        (String::from_utf8(seq.to_vec()).unwrap(), count)
    });

    FrequencyModel::from_counts(records, 4).expect("dense model")
}

/// A few well-separated quadgrams; everything else sits on the floor.
pub fn tiny_model() -> FrequencyModel {
    FrequencyModel::from_counts(
        vec![("TION", 500u64), ("NTHE", 300), ("THER", 150), ("THAT", 50)],
        4,
    )
    .unwrap()
}
