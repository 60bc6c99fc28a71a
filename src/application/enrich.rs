//! Fabricated-data enrichment.
//!
//! The upstream mock API serves bare records; enrichment attaches the
//! cosmetic fields the console renders (metrics, avatars, join dates).
//! Values are random on purpose — the field set and types are the
//! contract, not the values — so the generator sits behind a seedable
//! source and tests can pin it. Re-enriching the same raw record on a
//! later fetch legitimately diverges.

use std::sync::Mutex;

use plancia_api_types::{ApiPost, ApiUser};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use time::{Duration, OffsetDateTime};

use crate::cache::lock::mutex_lock;
use crate::domain::entities::{AuthorSnapshot, EntryRecord, SocialLinks, UserRecord};
use crate::domain::types::{EntryStatus, UserRole, UserStatus};
use crate::util::text;

const TAG_POOL: &[&str] = &[
    "technology",
    "programming",
    "web development",
    "react",
    "javascript",
    "tutorial",
];

const LOCATION_POOL: &[&str] = &["New York", "London", "Tokyo", "Paris", "Sydney"];

const SECS_PER_DAY: i64 = 24 * 60 * 60;

pub struct Enricher {
    rng: Mutex<SmallRng>,
}

impl Enricher {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    pub fn enrich_post(&self, raw: ApiPost, now: OffsetDateTime) -> EntryRecord {
        let mut rng = mutex_lock(&self.rng, "enrich.post");
        let created_at = now - Duration::seconds(rng.gen_range(0..365 * SECS_PER_DAY));
        let updated_at = now - Duration::seconds(rng.gen_range(0..30 * SECS_PER_DAY));
        let status = [
            EntryStatus::Published,
            EntryStatus::Draft,
            EntryStatus::Archived,
        ][rng.gen_range(0..3)];
        let views = rng.gen_range(0..10_000);
        let likes = rng.gen_range(0..500);
        let tag = TAG_POOL[rng.gen_range(0..TAG_POOL.len())].to_string();
        let excerpt = text::excerpt(&raw.body);

        EntryRecord {
            id: raw.id,
            title: raw.title,
            excerpt,
            user_id: raw.user_id,
            created_at,
            updated_at,
            status,
            views,
            likes,
            tags: vec![tag],
            author: author_snapshot(raw.user_id),
            body: raw.body,
        }
    }

    pub fn enrich_user(&self, raw: ApiUser, now: OffsetDateTime) -> UserRecord {
        let mut rng = mutex_lock(&self.rng, "enrich.user");
        let role = [
            UserRole::Admin,
            UserRole::Editor,
            UserRole::Author,
            UserRole::Subscriber,
        ][rng.gen_range(0..4)];
        let status = [UserStatus::Active, UserStatus::Inactive][rng.gen_range(0..2)];
        let join_date = now - Duration::seconds(rng.gen_range(0..365 * SECS_PER_DAY));
        let last_login = now - Duration::seconds(rng.gen_range(0..7 * SECS_PER_DAY));
        let location = LOCATION_POOL[rng.gen_range(0..LOCATION_POOL.len())].to_string();

        UserRecord {
            avatar: avatar_url(raw.id),
            role,
            status,
            join_date,
            last_login,
            bio: format!(
                "This is a bio for {}. They are passionate about technology and innovation.",
                raw.name
            ),
            location,
            website: format!("https://{}.com", raw.username.to_lowercase()),
            social: SocialLinks {
                twitter: format!("@{}", raw.username),
                linkedin: format!("linkedin.com/in/{}", raw.username),
                github: format!("github.com/{}", raw.username),
            },
            id: raw.id,
            name: raw.name,
            username: raw.username,
            email: raw.email,
        }
    }
}

/// Denormalized author block fabricated from the upstream user id.
pub(crate) fn author_snapshot(user_id: u64) -> AuthorSnapshot {
    AuthorSnapshot {
        id: user_id,
        name: format!("User {user_id}"),
        email: format!("user{user_id}@example.com"),
        avatar: avatar_url(user_id),
    }
}

pub(crate) fn avatar_url(id: u64) -> String {
    format!("https://i.pravatar.cc/150?img={id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_post(id: u64) -> ApiPost {
        ApiPost {
            user_id: 3,
            id,
            title: "Raw title".to_string(),
            body: "b".repeat(400),
        }
    }

    fn raw_user() -> ApiUser {
        ApiUser {
            id: 7,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "leanne@example.com".to_string(),
            website: "hildegard.org".to_string(),
        }
    }

    #[test]
    fn post_enrichment_keeps_the_raw_identity_fields() {
        let enricher = Enricher::seeded(1);
        let entry = enricher.enrich_post(raw_post(9), OffsetDateTime::now_utc());
        assert_eq!(entry.id, 9);
        assert_eq!(entry.user_id, 3);
        assert_eq!(entry.title, "Raw title");
    }

    #[test]
    fn post_enrichment_satisfies_the_shape_contract() {
        let enricher = Enricher::seeded(2);
        let now = OffsetDateTime::now_utc();
        let entry = enricher.enrich_post(raw_post(1), now);

        assert!(matches!(
            entry.status,
            EntryStatus::Published | EntryStatus::Draft | EntryStatus::Archived
        ));
        assert!(entry.views < 10_000);
        assert!(entry.likes < 500);
        assert_eq!(entry.tags.len(), 1);
        assert!(TAG_POOL.contains(&entry.tags[0].as_str()));
        assert!(entry.created_at <= now);
        assert!(entry.excerpt.ends_with("..."));
        assert!(entry.body.starts_with(entry.excerpt.trim_end_matches("...")));
        assert_eq!(entry.author.id, entry.user_id);
        assert_eq!(entry.author.email, "user3@example.com");
    }

    #[test]
    fn user_enrichment_derives_handles_from_the_username() {
        let enricher = Enricher::seeded(3);
        let user = enricher.enrich_user(raw_user(), OffsetDateTime::now_utc());

        assert_eq!(user.website, "https://bret.com");
        assert_eq!(user.social.twitter, "@Bret");
        assert_eq!(user.social.github, "github.com/Bret");
        assert_eq!(user.avatar, "https://i.pravatar.cc/150?img=7");
        assert!(LOCATION_POOL.contains(&user.location.as_str()));
        assert!(user.bio.contains("Leanne Graham"));
    }

    #[test]
    fn seeded_enrichment_is_deterministic() {
        let now = OffsetDateTime::now_utc();
        let a = Enricher::seeded(42).enrich_post(raw_post(1), now);
        let b = Enricher::seeded(42).enrich_post(raw_post(1), now);
        assert_eq!(a, b);
    }

    #[test]
    fn last_login_is_within_the_past_week() {
        let enricher = Enricher::seeded(4);
        let now = OffsetDateTime::now_utc();
        for _ in 0..32 {
            let user = enricher.enrich_user(raw_user(), now);
            assert!(now - user.last_login < Duration::days(7));
            assert!(user.last_login <= now);
        }
    }
}
