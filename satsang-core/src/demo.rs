//! Demo-mode utilities for seeding synthetic catalogs. Only compiled when
//! the `demo` feature flag is enabled so production builds carry none of
//! the fixture data.

use chrono::Utc;
use satsang_model::{
    BookCategory, BookID, BookSummary, CatalogEntry, CatalogKind, GeoPoint,
    MeditationCategory, MeditationID, MeditationSummary, PlaceCategory,
    PlaceID, PlaceSummary, Route, RouteID, TeachingCategory, TeachingID,
    TeachingSummary,
};

use crate::catalog::Catalog;
use crate::snapshot::CatalogSnapshot;

/// Builds a ready-to-browse catalog of the requested family.
pub fn seed_catalog(kind: CatalogKind) -> Catalog {
    Catalog::from_snapshot(seed_snapshot(kind))
}

/// Builds the snapshot form of the seed data, useful for writing demo
/// libraries to disk and exercising the full manifest pipeline.
pub fn seed_snapshot(kind: CatalogKind) -> CatalogSnapshot {
    match kind {
        CatalogKind::Places => places_snapshot(),
        CatalogKind::Teachings => teachings_snapshot(),
        CatalogKind::Books => books_snapshot(),
        CatalogKind::Meditations => meditations_snapshot(),
    }
}

fn place(
    title: &str,
    description: &str,
    category: PlaceCategory,
    lat: f64,
    lng: f64,
) -> (PlaceID, CatalogEntry) {
    let id = PlaceID::new();
    let entry = CatalogEntry::Place(PlaceSummary {
        id,
        title: title.into(),
        description: description.into(),
        category,
        thumbnail: None,
        coordinates: Some(GeoPoint { lat, lng }),
    });
    (id, entry)
}

fn places_snapshot() -> CatalogSnapshot {
    let (kashi_temple, kashi_temple_entry) = place(
        "Kashi Vishwanath Temple",
        "Jyotirlinga shrine in the heart of Varanasi",
        PlaceCategory::Temple,
        25.3109,
        83.0107,
    );
    let (ghat, ghat_entry) = place(
        "Dashashwamedh Ghat",
        "Evening Ganga aarti draws the whole city",
        PlaceCategory::Ghat,
        25.3052,
        83.0111,
    );
    let (varanasi, varanasi_entry) = place(
        "Varanasi",
        "City of light on the Ganga",
        PlaceCategory::City,
        25.3176,
        82.9739,
    );
    let (kedarnath, kedarnath_entry) = place(
        "Kedarnath Temple",
        "Stone shrine below the Chorabari glacier",
        PlaceCategory::Temple,
        30.7352,
        79.0669,
    );
    let (badrinath, badrinath_entry) = place(
        "Badrinath Temple",
        "Vishnu's seat between the Nar and Narayana ridges",
        PlaceCategory::Temple,
        30.7433,
        79.4930,
    );
    let (gangotri, gangotri_entry) = place(
        "Gangotri",
        "Source shrine of the Ganga",
        PlaceCategory::Temple,
        30.9947,
        78.9398,
    );
    let (yamunotri, yamunotri_entry) = place(
        "Yamunotri",
        "Source shrine of the Yamuna",
        PlaceCategory::Temple,
        31.0146,
        78.4601,
    );
    let (_ashram, ashram_entry) = place(
        "Sivananda Ashram",
        "Divine Life Society on the Ganga at Rishikesh",
        PlaceCategory::Ashram,
        30.1087,
        78.2975,
    );
    let (_guha, guha_entry) = place(
        "Vasishta Guha",
        "Meditation cave upstream of Rishikesh",
        PlaceCategory::Cave,
        30.0405,
        78.4085,
    );
    let (_hill, hill_entry) = place(
        "Arunachala",
        "Sacred hill circled by pilgrims at Tiruvannamalai",
        PlaceCategory::Mountain,
        12.2253,
        79.0718,
    );

    let routes = vec![
        Route {
            id: RouteID::new(),
            name: "Char Dham of Garhwal".into(),
            description: "Four Himalayan shrines walked west to east".into(),
            thumbnail: None,
            places: vec![yamunotri, gangotri, kedarnath, badrinath],
        },
        Route {
            id: RouteID::new(),
            name: "Kashi Darshan".into(),
            description: "A day on foot in the old city".into(),
            thumbnail: None,
            places: vec![varanasi, kashi_temple, ghat],
        },
    ];

    CatalogSnapshot {
        kind: CatalogKind::Places,
        generated_at: Some(Utc::now()),
        entries: vec![
            kashi_temple_entry,
            ghat_entry,
            varanasi_entry,
            kedarnath_entry,
            badrinath_entry,
            gangotri_entry,
            yamunotri_entry,
            ashram_entry,
            guha_entry,
            hill_entry,
        ],
        routes,
    }
}

fn teaching(
    title: &str,
    description: &str,
    category: TeachingCategory,
    duration_secs: Option<u32>,
    author: Option<&str>,
) -> CatalogEntry {
    CatalogEntry::Teaching(TeachingSummary {
        id: TeachingID::new(),
        title: title.into(),
        description: description.into(),
        category,
        thumbnail: None,
        duration_secs,
        author: author.map(Into::into),
    })
}

fn teachings_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        kind: CatalogKind::Teachings,
        generated_at: Some(Utc::now()),
        entries: vec![
            teaching(
                "On Stillness",
                "Morning talk on resting attention in the heart",
                TeachingCategory::Audio,
                Some(1800),
                Some("Swami Advayananda"),
            ),
            teaching(
                "The Yoga of Action",
                "Karma yoga as taught in the second chapter",
                TeachingCategory::Video,
                Some(3605),
                Some("Swami Advayananda"),
            ),
            teaching(
                "Reading the Gita Slowly",
                "Twelve-week guided reading course",
                TeachingCategory::Course,
                None,
                Some("Uma Krishnan"),
            ),
            teaching(
                "Notes on Self-Inquiry",
                "Written companion to the inquiry retreats",
                TeachingCategory::Article,
                None,
                None,
            ),
            teaching(
                "Chanting the Isha Upanishad",
                "Call-and-response chanting session",
                TeachingCategory::Audio,
                Some(2400),
                None,
            ),
        ],
        routes: Vec::new(),
    }
}

fn books_snapshot() -> CatalogSnapshot {
    let book = |title: &str,
                description: &str,
                category: BookCategory,
                chapter_count: u32,
                author: Option<&str>| {
        CatalogEntry::Book(BookSummary {
            id: BookID::new(),
            title: title.into(),
            description: description.into(),
            category,
            thumbnail: None,
            chapter_count,
            author: author.map(Into::into),
        })
    };

    CatalogSnapshot {
        kind: CatalogKind::Books,
        generated_at: Some(Utc::now()),
        entries: vec![
            book(
                "Bhagavad Gītā",
                "Song of the Lord, with word-for-word gloss",
                BookCategory::Scripture,
                18,
                None,
            ),
            book(
                "Jnaneshwari",
                "Marathi verse commentary on the Gita",
                BookCategory::Commentary,
                18,
                Some("Jnaneshwar"),
            ),
            book(
                "Autobiography of a Yogi",
                "Life of a yogi between India and the West",
                BookCategory::Biography,
                49,
                Some("Paramahansa Yogananda"),
            ),
            book(
                "The Science of Pranayama",
                "Practice manual for the eight classical breaths",
                BookCategory::Practice,
                16,
                Some("Swami Sivananda"),
            ),
        ],
        routes: Vec::new(),
    }
}

fn meditations_snapshot() -> CatalogSnapshot {
    let meditation = |title: &str,
                      description: &str,
                      category: MeditationCategory,
                      duration_secs: Option<u32>| {
        CatalogEntry::Meditation(MeditationSummary {
            id: MeditationID::new(),
            title: title.into(),
            description: description.into(),
            category,
            thumbnail: None,
            duration_secs,
        })
    };

    CatalogSnapshot {
        kind: CatalogKind::Meditations,
        generated_at: Some(Utc::now()),
        entries: vec![
            meditation(
                "Guided Self-Inquiry",
                "Who am I, asked gently for twenty minutes",
                MeditationCategory::Guided,
                Some(1200),
            ),
            meditation(
                "So Ham",
                "Breath-anchored mantra repetition",
                MeditationCategory::Mantra,
                Some(900),
            ),
            meditation(
                "Nadi Shodhana",
                "Alternate-nostril breathing, unhurried",
                MeditationCategory::Breath,
                Some(600),
            ),
            meditation(
                "Silent Sitting at Dawn",
                "No instruction, one bell at each end",
                MeditationCategory::Silent,
                Some(1800),
            ),
        ],
        routes: Vec::new(),
    }
}
