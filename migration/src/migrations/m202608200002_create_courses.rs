use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608200002_create_courses"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("courses"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("course_number")).string().not_null())
                    .col(ColumnDef::new(Alias::new("credit_hours")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("semester_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("monday")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("tuesday")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("wednesday")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("thursday")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("friday")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("start_time")).string())
                    .col(ColumnDef::new(Alias::new("end_time")).string())
                    .col(ColumnDef::new(Alias::new("subject")).string())
                    .col(ColumnDef::new(Alias::new("location")).string())
                    .col(ColumnDef::new(Alias::new("description")).string())
                    .col(ColumnDef::new(Alias::new("capacity")).integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("enrollment_open")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("asynchronous")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("courses")).to_owned())
            .await
    }
}
