//! Encodes a small purchase order graph and prints the wire bytes.

use turbotape_codec_core_rs::{CodecBuilder, CodecError, FieldReader, FieldWriter, hex_view};

#[derive(Debug, PartialEq)]
struct Customer {
  name: String,
}

#[derive(Debug, PartialEq)]
struct OrderLine {
  sku:      String,
  quantity: i32,
}

#[derive(Debug, PartialEq)]
struct PurchaseOrder {
  customer: Customer,
  lines:    Vec<OrderLine>,
  express:  bool,
}

fn write_customer<'v>(writer: &mut FieldWriter<'v, '_>, value: &'v Customer) -> Result<(), CodecError> {
  writer.write_str(&value.name).named("name")?;
  Ok(())
}

fn read_customer(reader: &mut FieldReader) -> Result<Customer, CodecError> {
  Ok(Customer { name: reader.named("name")?.read_string()? })
}

fn write_order_line<'v>(writer: &mut FieldWriter<'v, '_>, value: &'v OrderLine) -> Result<(), CodecError> {
  writer.write_str(&value.sku).named("sku")?;
  writer.write_i32(value.quantity).named("quantity")?;
  Ok(())
}

fn read_order_line(reader: &mut FieldReader) -> Result<OrderLine, CodecError> {
  Ok(OrderLine { sku: reader.named("sku")?.read_string()?, quantity: reader.named("quantity")?.read_i32()? })
}

fn write_purchase_order<'v>(writer: &mut FieldWriter<'v, '_>, value: &'v PurchaseOrder) -> Result<(), CodecError> {
  writer.write_object(&value.customer).named("customer")?;
  writer.write_sequence(&value.lines).named("lines")?;
  writer.write_bool(value.express).named("express")?;
  Ok(())
}

fn read_purchase_order(reader: &mut FieldReader) -> Result<PurchaseOrder, CodecError> {
  Ok(PurchaseOrder {
    customer: reader.named("customer")?.read_object()?,
    lines:    reader.named("lines")?.read_sequence()?,
    express:  reader.named("express")?.read_bool()?,
  })
}

fn main() -> Result<(), CodecError> {
  let mut builder = CodecBuilder::new();
  builder.register::<PurchaseOrder, _, _>(None, write_purchase_order, read_purchase_order)?;
  builder.register::<Customer, _, _>(None, write_customer, read_customer)?;
  builder.register::<OrderLine, _, _>(None, write_order_line, read_order_line)?;
  let codec = builder.build()?;

  let order = PurchaseOrder {
    customer: Customer { name: "Ada".into() },
    lines:    vec![
      OrderLine { sku: "TAPE-01".into(), quantity: 3 },
      OrderLine { sku: "TAPE-02".into(), quantity: 1 },
    ],
    express:  true,
  };

  let bytes = codec.serialize_to_vec(&order)?;
  println!("{} bytes on the wire:", bytes.len());
  println!("{}", hex_view::format(&bytes));

  let decoded: PurchaseOrder = codec.deserialize_slice(&bytes)?;
  assert_eq!(decoded, order);
  println!("round trip ok: {decoded:?}");
  Ok(())
}
