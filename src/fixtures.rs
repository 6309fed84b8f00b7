//! Canonical sample data for tests.
//!
//! Wire-shaped JSON bodies shared by the inline unit tests and the
//! integration tests under `tests/`, so the same sample works appear
//! everywhere instead of per-call-site literals. Ids are stable: media 1
//! and 2, note 1, deep-dive session 1.

use serde_json::{json, Value};

/// Wire record for the sample anime (media id 1).
pub fn anime_record() -> Value {
    json!({
        "id": 1,
        "title": "鬼滅の刃",
        "media_type": "ANIME",
        "creator": "吾峠呼世晴",
        "release_year": 2019,
        "cover_image": "https://via.placeholder.com/150",
        "genres": ["アクション", "ファンタジー"],
        "description": "家族を鬼に殺された少年が、鬼殺隊に入隊し、妹を人間に戻すために戦う物語。",
        "captured_at": "2024-01-15T10:30:00Z"
    })
}

/// Wire record for the sample book (media id 2).
pub fn book_record() -> Value {
    json!({
        "id": 2,
        "title": "ハリー・ポッターと賢者の石",
        "media_type": "BOOK",
        "creator": "J.K. ローリング",
        "release_year": 1997,
        "cover_image": "https://via.placeholder.com/150",
        "genres": ["ファンタジー", "冒険"],
        "description": "11歳の少年ハリー・ポッターが魔法学校ホグワーツで魔法を学び、闇の魔法使いヴォルデモートと対決する物語。",
        "captured_at": "2024-01-16T19:45:00Z"
    })
}

/// Both sample media records as a listing body.
pub fn media_records() -> Value {
    json!([anime_record(), book_record()])
}

/// Wire record for the sample note (note id 1, on media 1).
///
/// `rating` is deliberately the float the backend emits.
pub fn note_record() -> Value {
    json!({
        "id": 1,
        "media_id": 1,
        "content": "無限列車編で泣いた。煉獄さんの生き様が心に残る。",
        "rating": 5.0,
        "emotion": "moved",
        "ai_summary": "キャラクターの生き様に強く共感し、特に自己犠牲の精神に感動している様子が伺えます。",
        "created_at": "2024-02-01T21:00:00Z",
        "updated_at": "2024-02-01T21:00:00Z"
    })
}

/// A second note on the same media item (note id 2), without the
/// optional fields.
pub fn bare_note_record() -> Value {
    json!({
        "id": 2,
        "media_id": 1,
        "content": "作画の気合がすごい",
        "created_at": "2024-02-03T09:15:00Z",
        "updated_at": "2024-02-03T09:15:00Z"
    })
}

/// Both sample notes as a listing body.
pub fn note_records() -> Value {
    json!([note_record(), bare_note_record()])
}

/// Wire record for the sample deep-dive session (session id 1, on media 1).
pub fn deep_dive_record() -> Value {
    json!({
        "id": 1,
        "media_id": 1,
        "question": "なぜ主人公は最後にあの選択をしたのか？",
        "answer": "この作品の裏テーマは「自己犠牲と救済」です。主人公の行動の根底には常に他者を救うための自己犠牲の精神があります。",
        "related_works": [
            {
                "id": 1,
                "title": "千と千尋の神隠し",
                "creator": "宮崎駿",
                "description": "自己犠牲と成長をテーマにした作品。",
                "url": "https://example.com/spirited-away"
            },
            {
                "id": 2,
                "title": "進撃の巨人",
                "creator": "諫山創",
                "description": "自由と犠牲の意味を問う作品。",
                "url": "https://example.com/attack-on-titan"
            }
        ],
        "created_at": "2024-02-05T18:30:00Z"
    })
}

/// The sample sessions as a listing body.
pub fn deep_dive_records() -> Value {
    json!([deep_dive_record()])
}
