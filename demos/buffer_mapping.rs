//! Demo: Mapping an S7 data block image
//!
//! Run with: cargo run --example buffer_mapping --features chrono
//!
//! This demo shows:
//! - Writing and reading numeric values at fixed offsets
//! - Bit access
//! - STRING and ARRAY OF CHAR handling
//! - Date and time types
//! - Checked access with `read_value`/`write_value`
//! - Catalog lookups and TSAP parsing

use s7_buffer::bits::{get_bit_at, set_bit_at};
use s7_buffer::datetime::{get_date_and_time_at, get_dtl_at, set_date_and_time_at, set_dtl_at};
use s7_buffer::int::{get_dint_at, get_int_at, get_sint_at, set_dint_at, set_int_at, set_sint_at};
use s7_buffer::real::{get_real_at, set_real_at};
use s7_buffer::string::{get_chars_at, get_string_at, set_chars_at, set_string_at, string_size};
use s7_buffer::time::{get_tod_at, set_tod_at};
use s7_buffer::{
    area_source_label, data_type_label, data_type_size, plc_family_label, read_value,
    word_from_tsap, write_value, Address, AreaSource, DataType, DateAndTime, Dtl, PlcFamily,
    S7Error, S7Value, TimeOfDay, Tsap,
};

fn main() -> s7_buffer::Result<()> {
    // =========================================================================
    // Numeric values
    // =========================================================================

    println!("=== Numeric Values ===\n");

    let mut db = vec![0u8; 64];

    set_int_at(&mut db, 0, -1200);
    set_dint_at(&mut db, 2, 1_234_567);
    set_real_at(&mut db, 6, 21.75);
    set_sint_at(&mut db, 10, 300); // clamps to 127

    println!("DB1.DBW0  (INT)  = {}", get_int_at(&db, 0));
    println!("DB1.DBD2  (DINT) = {}", get_dint_at(&db, 2));
    println!("DB1.DBD6  (REAL) = {:.2}", get_real_at(&db, 6));
    println!("DB1.DBB10 (SINT) = {}", get_sint_at(&db, 10));
    println!("Raw: {:02X?}", &db[..11]);

    // =========================================================================
    // Bits
    // =========================================================================

    println!("\n=== Bits ===\n");

    set_bit_at(&mut db, 11, 0, true);
    set_bit_at(&mut db, 11, 5, true);
    set_bit_at(&mut db, 11, 9, true); // out of range, clamps to bit 7

    println!("DB1.DBX11.5 = {}", get_bit_at(&db, 11, 5));
    println!("DB1.DBB11   = {:#010b}", db[11]);
    for bit in (0..8).filter(|&bit| get_bit_at(&db, 11, bit)) {
        println!("  Bit {}: ON", bit);
    }

    // =========================================================================
    // Text
    // =========================================================================

    println!("\n=== Text ===\n");

    set_string_at(&mut db, 12, 20, "Pump 3");
    println!(
        "STRING[20] at 12 = \"{}\" (occupies {} bytes)",
        get_string_at(&db, 12),
        string_size(20)
    );

    set_chars_at(&mut db, 34, "ABCD");
    println!("ARRAY[0..3] OF CHAR at 34 = \"{}\"", get_chars_at(&db, 34, 4));

    // =========================================================================
    // Date and time
    // =========================================================================

    println!("\n=== Date and Time ===\n");

    set_tod_at(&mut db, 38, &TimeOfDay::new(6, 30, 0, 0));
    set_date_and_time_at(&mut db, 42, &DateAndTime::new(2024, 3, 15, 8, 30, 0, 250));
    set_dtl_at(&mut db, 50, &Dtl::new(2024, 3, 15, 8, 30, 0, 250_000_000));

    println!("TOD at 38 = {}", get_tod_at(&db, 38));
    let dt = get_date_and_time_at(&db, 42);
    println!("DATE_AND_TIME at 42 = {} (weekday {})", dt, dt.weekday);
    println!("DTL at 50 = {}", get_dtl_at(&db, 50));

    #[cfg(feature = "chrono")]
    {
        let ndt = chrono::NaiveDateTime::try_from(dt);
        println!("As chrono: {:?}", ndt);
    }

    // =========================================================================
    // Checked access
    // =========================================================================

    println!("\n=== Checked Access ===\n");

    write_value(&mut db, Address::new(62), &S7Value::Word(0xBEEF))?;
    println!("DB1.DBW62 = {:?}", read_value(&db, Address::new(62), DataType::Word)?);

    match read_value(&db, Address::new(62), DataType::LReal) {
        Ok(value) => println!("Unexpected value: {:?}", value),
        Err(S7Error::OutOfBounds { offset, size, len }) => {
            println!("LREAL at {} needs {} bytes, buffer has {}", offset, size, len);
        }
        Err(e) => println!("Error: {}", e),
    }

    // =========================================================================
    // Catalogs and TSAP
    // =========================================================================

    println!("\n=== Catalogs ===\n");

    for ty in DataType::ALL {
        println!(
            "  {:>2} {:<14} {} byte(s)",
            ty.code(),
            data_type_label(ty.code()),
            data_type_size(ty.code())
        );
    }
    println!("Family {}: {}", 1, plc_family_label(PlcFamily::S71200_1500.code()));
    println!("Family 99: {}", plc_family_label(99));
    println!("Area 0x84: {}", area_source_label(AreaSource::DataBlock.code()));
    println!("Area 0x1C: {}", area_source_label(0x1C));

    println!("\nTSAP \"10.02\" = 0x{:04X}", word_from_tsap("10.02"));
    match "03.zz".parse::<Tsap>() {
        Ok(tsap) => println!("Parsed {}", tsap),
        Err(e) => println!("Rejected: {}", e),
    }

    println!("\nBuffer mapping demo completed!");
    Ok(())
}
