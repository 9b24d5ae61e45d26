use manga_timeline::{
    ChapterRange, ChapterTable, Season, SplitChapterMap, SplitEntry, TimelineData,
};

/// The minimal two-volume title: volume 0 holds chapters of 10 and 20
/// pages, volume 1 a single 30-page chapter.
pub fn two_volume_title() -> TimelineData {
    TimelineData {
        chapters: ChapterTable::new(vec![10, 20, 30], vec![0, 2]).unwrap(),
        arcs: Vec::new(),
        sagas: Vec::new(),
        seasons: Vec::new(),
        splits: SplitChapterMap::new(),
    }
}

/// A ten-chapter title exercising every grouping, with chapter 4 (40
/// pages) adapted 25/15 across both an arc boundary and an episode
/// boundary.
///
/// Page counts by chapter number: 10, 20, 30, 40, 10, 30, 20, 20, 30, 40
/// (250 total). Volumes: chapters 1-3, 4-6, 7-8, 9-10.
pub fn adapted_title() -> TimelineData {
    TimelineData {
        chapters: ChapterTable::new(
            vec![10, 20, 30, 40, 10, 30, 20, 20, 30, 40],
            vec![0, 3, 6, 8],
        )
        .unwrap(),
        arcs: vec![
            ChapterRange::new(1, 5),
            ChapterRange::new(4, 9),
            ChapterRange::new(9, 11),
        ],
        sagas: vec![ChapterRange::new(1, 9), ChapterRange::open(9)],
        seasons: vec![
            Season {
                range: ChapterRange::new(1, 6),
                episodes: vec![
                    ChapterRange::new(1, 3),
                    ChapterRange::new(3, 5),
                    ChapterRange::new(4, 6),
                ],
            },
            Season {
                range: ChapterRange::open(6),
                episodes: vec![ChapterRange::new(6, 8), ChapterRange::open(8)],
            },
        ],
        splits: SplitChapterMap::from_entries([SplitEntry {
            chapter: 4,
            earlier_pages: 25,
        }]),
    }
}

/// The adapted title as the shell would hand it over a serialization
/// boundary.
pub fn adapted_title_json() -> &'static str {
    r#"{
        "chapters": {
            "pages": [10, 20, 30, 40, 10, 30, 20, 20, 30, 40],
            "volume_starts": [0, 3, 6, 8]
        },
        "arcs": [
            { "from": 1, "to": 5 },
            { "from": 4, "to": 9 },
            { "from": 9, "to": 11 }
        ],
        "sagas": [
            { "from": 1, "to": 9 },
            { "from": 9, "to": null }
        ],
        "seasons": [
            {
                "range": { "from": 1, "to": 6 },
                "episodes": [
                    { "from": 1, "to": 3 },
                    { "from": 3, "to": 5 },
                    { "from": 4, "to": 6 }
                ]
            },
            {
                "range": { "from": 6, "to": null },
                "episodes": [
                    { "from": 6, "to": 8 },
                    { "from": 8, "to": null }
                ]
            }
        ],
        "splits": { "entries": [{ "chapter": 4, "earlier_pages": 25 }] }
    }"#
}
