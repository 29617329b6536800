use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建账号表（学生/教师关联的登录账号，认证不在本系统范围内）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建院系表
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .col(
                        ColumnDef::new(Departments::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Departments::Description).text().null())
                    .col(
                        ColumnDef::new(Departments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Departments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::DepartmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::Credits).integer().not_null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Students::StudentCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Students::DepartmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::EnrollmentDate).date().not_null())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::TeacherCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::DepartmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Teachers::Phone).string().null())
                    .col(ColumnDef::new(Teachers::Specialization).string().null())
                    .col(ColumnDef::new(Teachers::OfficeLocation).string().null())
                    .col(ColumnDef::new(Teachers::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学期表
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Semesters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Semesters::Name).string().not_null())
                    .col(
                        ColumnDef::new(Semesters::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Semesters::StartDate).date().not_null())
                    .col(ColumnDef::new(Semesters::EndDate).date().not_null())
                    .col(ColumnDef::new(Semesters::IsCurrent).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程安排表
        manager
            .create_table(
                Table::create()
                    .table(ClassSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::SemesterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::DayOfWeek)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassSchedules::StartTime).time().not_null())
                    .col(ColumnDef::new(ClassSchedules::EndTime).time().not_null())
                    .col(ColumnDef::new(ClassSchedules::Room).string().null())
                    .col(ColumnDef::new(ClassSchedules::IsActive).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSchedules::Table, ClassSchedules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSchedules::Table, ClassSchedules::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSchedules::Table, ClassSchedules::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤记录表
        manager
            .create_table(
                Table::create()
                    .table(Attendances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendances::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Attendances::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendances::ClassScheduleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendances::Date).date().not_null())
                    .col(ColumnDef::new(Attendances::Status).string().not_null())
                    .col(ColumnDef::new(Attendances::Notes).text().null())
                    .col(ColumnDef::new(Attendances::MarkedBy).big_integer().null())
                    .col(
                        ColumnDef::new(Attendances::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendances::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendances::Table, Attendances::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendances::Table, Attendances::ClassScheduleId)
                            .to(ClassSchedules::Table, ClassSchedules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendances::Table, Attendances::MarkedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 考勤唯一约束：同一学生、同一课程安排、同一天只允许一条记录
        // upsert 的正确性依赖这个索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_attendances_student_schedule_date")
                    .table(Attendances::Table)
                    .col(Attendances::StudentId)
                    .col(Attendances::ClassScheduleId)
                    .col(Attendances::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendances_student_date")
                    .table(Attendances::Table)
                    .col(Attendances::StudentId)
                    .col(Attendances::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendances_schedule_date")
                    .table(Attendances::Table)
                    .col(Attendances::ClassScheduleId)
                    .col(Attendances::Date)
                    .to_owned(),
            )
            .await?;

        // 创建考勤变更日志表（仅追加）
        manager
            .create_table(
                Table::create()
                    .table(AttendanceLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceLogs::AttendanceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceLogs::Action).string().not_null())
                    .col(ColumnDef::new(AttendanceLogs::OldStatus).string().null())
                    .col(
                        ColumnDef::new(AttendanceLogs::NewStatus)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceLogs::ChangedBy)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceLogs::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceLogs::Table, AttendanceLogs::AttendanceId)
                            .to(Attendances::Table, Attendances::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceLogs::Table, AttendanceLogs::ChangedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Notifications::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::Link).string().null())
                    .col(ColumnDef::new(Notifications::IsRead).boolean().not_null())
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    DisplayName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    Name,
    Code,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    Code,
    DepartmentId,
    Credits,
    Description,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    UserId,
    StudentCode,
    DepartmentId,
    EnrollmentDate,
    Phone,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    UserId,
    TeacherCode,
    DepartmentId,
    Phone,
    Specialization,
    OfficeLocation,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Semesters {
    #[sea_orm(iden = "semesters")]
    Table,
    Id,
    Name,
    Code,
    StartDate,
    EndDate,
    IsCurrent,
}

#[derive(DeriveIden)]
enum ClassSchedules {
    #[sea_orm(iden = "class_schedules")]
    Table,
    Id,
    CourseId,
    TeacherId,
    SemesterId,
    DayOfWeek,
    StartTime,
    EndTime,
    Room,
    IsActive,
}

#[derive(DeriveIden)]
enum Attendances {
    #[sea_orm(iden = "attendances")]
    Table,
    Id,
    StudentId,
    ClassScheduleId,
    Date,
    Status,
    Notes,
    MarkedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AttendanceLogs {
    #[sea_orm(iden = "attendance_logs")]
    Table,
    Id,
    AttendanceId,
    Action,
    OldStatus,
    NewStatus,
    ChangedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    UserId,
    Title,
    Message,
    Link,
    IsRead,
    CreatedAt,
}
