use contracts::domain::a002_points::aggregate::PointsEntry;

use super::parser::parse_points;
use crate::shared::sheets::{ranges, FetchOptions, SheetsService, TransportError};

/// Получение таблицы очков
pub async fn get_points(
    sheets: &SheetsService,
    options: FetchOptions,
) -> Result<Vec<PointsEntry>, TransportError> {
    let table = sheets.table(ranges::POINTS, options).await?;
    Ok(parse_points(&table))
}
