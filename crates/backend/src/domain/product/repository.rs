use contracts::domain::product::aggregate::{Product, ProductId};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        Product {
            id: ProductId(uuid),
            name: m.name,
            price: m.price,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All products in creation order.
pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    let items = Entity::find()
        .order_by_asc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(product: &Product) -> anyhow::Result<()> {
    let now = chrono::Utc::now();
    let active = ActiveModel {
        id: Set(product.id.as_string()),
        name: Set(product.name.clone()),
        price: Set(product.price),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    Entity::insert(active).exec(conn()).await?;
    Ok(())
}

pub async fn update(product: &Product) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(product.id.as_string()),
        name: Set(product.name.clone()),
        price: Set(product.price),
        updated_at: Set(Some(chrono::Utc::now())),
        ..Default::default()
    };
    Entity::update(active).exec(conn()).await?;
    Ok(())
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
