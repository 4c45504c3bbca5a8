// benches/segment.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use sansad_scrape::segment::{Profile, Segmenter};

/// A day's sitting: honorific headers, ministerial uppercase headers the
/// fallback has to pick up, a little Devanagari.
fn synthetic_transcript(turns: usize) -> String {
    let mut doc = String::from("The Lok Sabha met at Eleven of the Clock.\n\n");
    for i in 0..turns {
        match i % 4 {
            0 => doc.push_str(&format!("SHRI MEMBER {i} (CONSTITUENCY): Sir, I rise to speak on the motion. ")),
            1 => doc.push_str("HON. SPEAKER: Please conclude. "),
            2 => doc.push_str(&format!("THE MINISTER OF FINANCE (SHRI X{i}): The legis-\nlation is clear. ")),
            _ => doc.push_str("श्री राम: अध्यक्ष महोदय, धन्यवाद। "),
        }
        doc.push_str("The debate continued at some length with many words of little consequence.\n\n");
    }
    doc
}

fn bench_segment(c: &mut Criterion) {
    let doc = synthetic_transcript(400);

    for profile in Profile::ALL {
        let seg = Segmenter::for_profile(profile).expect("built-in patterns compile");
        c.bench_function(&format!("segment_{}", profile.label()), |b| {
            b.iter(|| {
                let out = seg.segment(black_box(&doc));
                black_box(out.segments.len())
            })
        });
    }
}

criterion_group!(benches, bench_segment);
criterion_main!(benches);
