use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::Id))
                    .col(string_len_uniq(Film::Title, 250))
                    .col(integer(Film::Year))
                    .col(string_len(Film::Description, 500))
                    .col(double_null(Film::Rating))
                    .col(string_len_null(Film::Review, 250))
                    .col(string_len(Film::PosterUrl, 250))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_rating")
                    .table(Film::Table)
                    .col(Film::Rating)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Film::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Film {
    Table,
    Id,
    Title,
    Year,
    Description,
    Rating,
    Review,
    PosterUrl,
}
