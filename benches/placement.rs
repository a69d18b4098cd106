use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;

use bubble_ar::{
    wrap_text, BubblePlacementEngine, CameraPose, PlacementSettings, Scene, WrapMode,
};

/// Build a transcript of `words` repeated words, like a long utterance
fn long_transcript(words: usize) -> String {
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(' ');
        }
        text.push_str("transcription");
    }
    text
}

fn bench_wrap_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");
    for words in [10usize, 100, 1000] {
        let text = long_transcript(words);
        group.bench_with_input(BenchmarkId::new("char_break", words), &text, |b, text| {
            b.iter(|| wrap_text(black_box(text), 20, WrapMode::CharBreak))
        });
        group.bench_with_input(BenchmarkId::new("word_wrap", words), &text, |b, text| {
            b.iter(|| wrap_text(black_box(text), 20, WrapMode::WordWrap))
        });
    }
    group.finish();
}

fn bench_place(c: &mut Criterion) {
    let engine = BubblePlacementEngine::new(PlacementSettings::default());
    let pose = CameraPose {
        direction: Vec3::new(0.0, 0.0, -1.0),
        position: Vec3::ZERO,
    };
    let text = long_transcript(100);

    c.bench_function("place_100_words", |b| {
        let mut scene = Scene::new();
        b.iter(|| engine.place(&mut scene, black_box(&text), &pose, None))
    });
}

criterion_group!(benches, bench_wrap_modes, bench_place);
criterion_main!(benches);
