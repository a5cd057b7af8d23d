use super::*;

impl_repo! {
    DonationTypeRepo {
        read {
            fn get_donation_type(&self, id: Id) -> Result<DonationType>;
            fn all_donation_types(&self) -> Result<Vec<DonationType>>;
            fn active_donation_types(&self) -> Result<Vec<DonationType>>;
            fn count_donation_types(&self) -> Result<usize>;
        }
        write {
            fn create_donation_type(&self, donation_type: &NewDonationType) -> Result<Id>;
            fn update_donation_type(&self, id: Id, donation_type: &NewDonationType) -> Result<()>;
            fn deactivate_donation_type(&self, id: Id) -> Result<()>;
        }
    }
}

fn create_donation_type(
    conn: &mut SqliteConnection,
    donation_type: &NewDonationType,
) -> Result<Id> {
    let NewDonationType {
        title,
        amount,
        description,
        icon_color,
        benefits,
        is_active,
        sort_order,
    } = donation_type;
    let now = Timestamp::now().as_millis();
    let model = models::NewDonationType {
        title,
        amount: *amount,
        description: description.as_deref(),
        icon_color: icon_color.as_deref(),
        benefits: join_list(benefits.as_slice()),
        is_active: *is_active,
        sort_order: *sort_order,
        created_at: now,
        updated_at: now,
    };
    diesel::insert_into(schema::donation_types::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_inserted_id(conn)
}

fn update_donation_type(
    conn: &mut SqliteConnection,
    id: Id,
    donation_type: &NewDonationType,
) -> Result<()> {
    use schema::donation_types::dsl;
    let NewDonationType {
        title,
        amount,
        description,
        icon_color,
        benefits,
        is_active,
        sort_order,
    } = donation_type;
    let changeset = models::UpdateDonationType {
        title,
        amount: *amount,
        description: description.as_deref(),
        icon_color: icon_color.as_deref(),
        benefits: join_list(benefits.as_slice()),
        is_active: *is_active,
        sort_order: *sort_order,
        updated_at: Timestamp::now().as_millis(),
    };
    let count = diesel::update(dsl::donation_types.filter(dsl::id.eq(id)))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn deactivate_donation_type(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::donation_types::dsl;
    let count = diesel::update(dsl::donation_types.filter(dsl::id.eq(id)))
        .set((
            dsl::is_active.eq(false),
            dsl::updated_at.eq(Timestamp::now().as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_donation_type(conn: &mut SqliteConnection, id: Id) -> Result<DonationType> {
    use schema::donation_types::dsl;
    Ok(dsl::donation_types
        .filter(dsl::id.eq(id))
        .first::<models::DonationTypeEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_donation_types(conn: &mut SqliteConnection) -> Result<Vec<DonationType>> {
    use schema::donation_types::dsl;
    Ok(dsl::donation_types
        .order_by((dsl::sort_order, dsl::id))
        .load::<models::DonationTypeEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn active_donation_types(conn: &mut SqliteConnection) -> Result<Vec<DonationType>> {
    use schema::donation_types::dsl;
    Ok(dsl::donation_types
        .filter(dsl::is_active.eq(true))
        .order_by((dsl::sort_order, dsl::id))
        .load::<models::DonationTypeEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_donation_types(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::donation_types::dsl;
    Ok(dsl::donation_types
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
