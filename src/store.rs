use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, SqlErr};

use crate::{
    entities::film,
    error::{AppError, AppResult},
    models::{NewFilm, RankedFilm},
};

#[derive(Clone)]
pub struct FilmStore {
    db: DatabaseConnection,
}

impl FilmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewFilm) -> AppResult<film::Model> {
        let title = new.title.clone();
        let model = film::ActiveModel {
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(None),
            review: Set(None),
            poster_url: Set(new.poster_url),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::DuplicateTitle(title),
            _ => AppError::from(e),
        })
    }

    pub async fn get(&self, id: i32) -> AppResult<film::Model> {
        film::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("film {id}")))
    }

    /// Writes only the rating and review columns of an existing film.
    pub async fn update(
        &self,
        id: i32,
        rating: f64,
        review: Option<String>,
    ) -> AppResult<film::Model> {
        let mut model: film::ActiveModel = self.get(id).await?.into();
        model.rating = Set(Some(rating));
        model.review = Set(review);
        Ok(model.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = film::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!("film {id}")));
        }
        Ok(())
    }

    pub async fn list(&self) -> AppResult<Vec<RankedFilm>> {
        let films = film::Entity::find()
            .order_by_asc(film::Column::Rating)
            .order_by_asc(film::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rank(films))
    }
}

/// Ranks films already sorted by ascending rating: the last one is ranked 1.
pub fn rank(films: Vec<film::Model>) -> Vec<RankedFilm> {
    let count = films.len();
    films
        .into_iter()
        .enumerate()
        .map(|(index, film)| RankedFilm { ranking: count - index, film })
        .collect()
}
