use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    CurioError(#[from] curio::error::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
