/**
 * Profile Database Operations
 *
 * Profiles live in `profiles`, joined with `users` for the owner's name and
 * avatar. Education and experience entries live in their own tables keyed
 * by profile, and are read back newest first (by insertion sequence).
 */

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::profile::{parse_skills, DateRange};
use crate::shared::{
    Education, EducationRequest, Experience, ExperienceRequest, Profile, ProfileOwner,
    ProfileRequest, Social,
};

const PROFILE_SELECT: &str = r#"
    SELECT p.id, p.user_id, u.name AS owner_name, u.avatar AS owner_avatar,
           p.handle, p.company, p.website, p.location, p.status, p.skills,
           p.bio, p.githubusername, p.youtube, p.twitter, p.facebook,
           p.linkedin, p.instagram, p.created_at
    FROM profiles p
    JOIN users u ON u.id = p.user_id
"#;

/// Profile row joined with its owner
#[derive(Debug, Clone, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: Uuid,
    owner_name: String,
    owner_avatar: String,
    handle: String,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    status: String,
    skills: String,
    bio: Option<String>,
    githubusername: Option<String>,
    youtube: Option<String>,
    twitter: Option<String>,
    facebook: Option<String>,
    linkedin: Option<String>,
    instagram: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct EducationRow {
    id: Uuid,
    profile_id: Uuid,
    school: String,
    degree: String,
    fieldofstudy: String,
    from_date: NaiveDate,
    to_date: Option<NaiveDate>,
    is_current: bool,
    description: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct ExperienceRow {
    id: Uuid,
    profile_id: Uuid,
    title: String,
    company: String,
    location: Option<String>,
    from_date: NaiveDate,
    to_date: Option<NaiveDate>,
    is_current: bool,
    description: Option<String>,
}

impl From<EducationRow> for Education {
    fn from(row: EducationRow) -> Self {
        Education {
            id: row.id,
            school: row.school,
            degree: row.degree,
            fieldofstudy: row.fieldofstudy,
            from: row.from_date,
            to: row.to_date,
            current: row.is_current,
            description: row.description,
        }
    }
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Experience {
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            from: row.from_date,
            to: row.to_date,
            current: row.is_current,
            description: row.description,
        }
    }
}

impl ProfileRow {
    fn into_profile(self, education: Vec<Education>, experience: Vec<Experience>) -> Profile {
        Profile {
            id: self.id,
            user: ProfileOwner {
                id: self.user_id,
                name: self.owner_name,
                avatar: self.owner_avatar,
            },
            handle: self.handle,
            company: self.company,
            website: self.website,
            location: self.location,
            status: self.status,
            skills: parse_skills(&self.skills),
            bio: self.bio,
            githubusername: self.githubusername,
            social: Social {
                youtube: self.youtube,
                twitter: self.twitter,
                facebook: self.facebook,
                linkedin: self.linkedin,
                instagram: self.instagram,
            },
            experience,
            education,
            date: self.created_at,
        }
    }
}

/// Load education rows, optionally restricted to one profile, newest first
async fn load_education(
    pool: &SqlitePool,
    profile_id: Option<Uuid>,
) -> Result<HashMap<Uuid, Vec<Education>>, sqlx::Error> {
    let rows = sqlx::query_as::<_, EducationRow>(
        r#"
        SELECT id, profile_id, school, degree, fieldofstudy, from_date, to_date, is_current, description
        FROM education
        WHERE $1 IS NULL OR profile_id = $1
        ORDER BY seq DESC
        "#
    )
    .bind(profile_id)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<Uuid, Vec<Education>> = HashMap::new();
    for row in rows {
        grouped.entry(row.profile_id).or_default().push(row.into());
    }
    Ok(grouped)
}

/// Load experience rows, optionally restricted to one profile, newest first
async fn load_experience(
    pool: &SqlitePool,
    profile_id: Option<Uuid>,
) -> Result<HashMap<Uuid, Vec<Experience>>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ExperienceRow>(
        r#"
        SELECT id, profile_id, title, company, location, from_date, to_date, is_current, description
        FROM experience
        WHERE $1 IS NULL OR profile_id = $1
        ORDER BY seq DESC
        "#
    )
    .bind(profile_id)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<Uuid, Vec<Experience>> = HashMap::new();
    for row in rows {
        grouped.entry(row.profile_id).or_default().push(row.into());
    }
    Ok(grouped)
}

async fn hydrate_one(pool: &SqlitePool, row: ProfileRow) -> Result<Profile, sqlx::Error> {
    let education = load_education(pool, Some(row.id)).await?.remove(&row.id).unwrap_or_default();
    let experience = load_experience(pool, Some(row.id)).await?.remove(&row.id).unwrap_or_default();
    Ok(row.into_profile(education, experience))
}

/// Get the profile owned by a user
pub async fn get_profile_by_user(pool: &SqlitePool, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
    let query = format!("{} WHERE p.user_id = $1", PROFILE_SELECT);
    let row = sqlx::query_as::<_, ProfileRow>(&query)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(hydrate_one(pool, row).await?)),
        None => Ok(None),
    }
}

/// Get a profile by its handle
pub async fn get_profile_by_handle(pool: &SqlitePool, handle: &str) -> Result<Option<Profile>, sqlx::Error> {
    let query = format!("{} WHERE p.handle = $1", PROFILE_SELECT);
    let row = sqlx::query_as::<_, ProfileRow>(&query)
        .bind(handle)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(hydrate_one(pool, row).await?)),
        None => Ok(None),
    }
}

/// List every profile, oldest first
pub async fn list_profiles(pool: &SqlitePool) -> Result<Vec<Profile>, sqlx::Error> {
    let query = format!("{} ORDER BY p.created_at ASC", PROFILE_SELECT);
    let rows = sqlx::query_as::<_, ProfileRow>(&query).fetch_all(pool).await?;

    let mut education = load_education(pool, None).await?;
    let mut experience = load_experience(pool, None).await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let edu = education.remove(&row.id).unwrap_or_default();
            let exp = experience.remove(&row.id).unwrap_or_default();
            row.into_profile(edu, exp)
        })
        .collect())
}

/// Get the ID of the profile owned by a user
pub async fn get_profile_id(pool: &SqlitePool, user_id: Uuid) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Get the user owning a handle
pub async fn get_handle_owner(pool: &SqlitePool, handle: &str) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM profiles WHERE handle = $1")
        .bind(handle)
        .fetch_optional(pool)
        .await
}

/// Create the user's profile, or overwrite its fields if it exists
///
/// Entries and the creation date are kept on update. A handle taken by
/// another profile surfaces as a unique-violation database error.
pub async fn upsert_profile(
    pool: &SqlitePool,
    user_id: Uuid,
    request: &ProfileRequest,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO profiles (
            id, user_id, handle, company, website, location, status, skills,
            bio, githubusername, youtube, twitter, facebook, linkedin, instagram, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        ON CONFLICT (user_id) DO UPDATE SET
            handle = excluded.handle,
            company = excluded.company,
            website = excluded.website,
            location = excluded.location,
            status = excluded.status,
            skills = excluded.skills,
            bio = excluded.bio,
            githubusername = excluded.githubusername,
            youtube = excluded.youtube,
            twitter = excluded.twitter,
            facebook = excluded.facebook,
            linkedin = excluded.linkedin,
            instagram = excluded.instagram
        "#
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&request.handle)
    .bind(&request.company)
    .bind(&request.website)
    .bind(&request.location)
    .bind(&request.status)
    .bind(request.skill_list().join(","))
    .bind(&request.bio)
    .bind(&request.githubusername)
    .bind(&request.youtube)
    .bind(&request.twitter)
    .bind(&request.facebook)
    .bind(&request.linkedin)
    .bind(&request.instagram)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert an education entry; it becomes the newest entry
pub async fn add_education(
    pool: &SqlitePool,
    profile_id: Uuid,
    request: &EducationRequest,
    dates: DateRange,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO education (id, profile_id, school, degree, fieldofstudy, from_date, to_date, is_current, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#
    )
    .bind(id)
    .bind(profile_id)
    .bind(&request.school)
    .bind(&request.degree)
    .bind(&request.fieldofstudy)
    .bind(dates.from)
    .bind(dates.to)
    .bind(request.current)
    .bind(&request.description)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Insert an experience entry; it becomes the newest entry
pub async fn add_experience(
    pool: &SqlitePool,
    profile_id: Uuid,
    request: &ExperienceRequest,
    dates: DateRange,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO experience (id, profile_id, title, company, location, from_date, to_date, is_current, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#
    )
    .bind(id)
    .bind(profile_id)
    .bind(&request.title)
    .bind(&request.company)
    .bind(&request.location)
    .bind(dates.from)
    .bind(dates.to)
    .bind(request.current)
    .bind(&request.description)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Delete an education entry of a profile
///
/// # Returns
/// `false` if the profile has no entry with that ID
pub async fn delete_education(pool: &SqlitePool, profile_id: Uuid, entry_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM education WHERE id = $1 AND profile_id = $2")
        .bind(entry_id)
        .bind(profile_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete an experience entry of a profile
///
/// # Returns
/// `false` if the profile has no entry with that ID
pub async fn delete_experience(pool: &SqlitePool, profile_id: Uuid, entry_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM experience WHERE id = $1 AND profile_id = $2")
        .bind(entry_id)
        .bind(profile_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
