//! Builders shared by the transform tests.

use chrono::NaiveDate;
use costar_core::{Credit, CreditRole, MediaKind, Performer, PerformerProfile};

pub(crate) fn performer(id: i64, name: &str) -> Performer {
    Performer {
        id,
        name: name.to_string(),
        profile: PerformerProfile::default(),
        movie_credits: vec![],
        movie_crew: vec![],
        tv_credits: vec![],
        tv_crew: vec![],
    }
}

pub(crate) fn credit(id: i64, title: &str, kind: MediaKind, role: CreditRole) -> Credit {
    Credit {
        id,
        title: title.to_string(),
        media_kind: kind,
        role,
        character: None,
        job: None,
        popularity: None,
        release_date: None,
        revenue: None,
    }
}

pub(crate) fn movie_role(id: i64, character: &str, popularity: f64) -> Credit {
    Credit {
        character: Some(character.to_string()),
        popularity: Some(popularity),
        ..credit(id, &format!("Movie {id}"), MediaKind::Movie, CreditRole::Cast)
    }
}

pub(crate) fn box_office(id: i64, title: &str, year: i32, revenue: u64) -> Credit {
    Credit {
        release_date: NaiveDate::from_ymd_opt(year, 6, 15),
        revenue: Some(revenue),
        ..credit(id, title, MediaKind::Movie, CreditRole::Cast)
    }
}
