/// A personal auto quote response with two vehicles.
pub const AUTO_QUOTE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ACORD>
  <InsuranceSvcRs>
    <PersAutoPolicyQuoteInqRs>
      <PersAutoLineBusiness>
        <PersDriver id="Drv1"/>
        <PersVeh id="1" RatedDriverRef="1">
          <Manufacturer>Volvo</Manufacturer>
          <Coverage>
            <CoverageCd>BI</CoverageCd>
            <Limit><FormatInteger>100000</FormatInteger><LimitAppliesToCd>PerPerson</LimitAppliesToCd></Limit>
            <Limit><FormatInteger>300000</FormatInteger><LimitAppliesToCd>PerAccident</LimitAppliesToCd></Limit>
            <CurrentTermAmt><Amt>120.00</Amt></CurrentTermAmt>
          </Coverage>
          <Coverage>
            <CoverageCd>PD</CoverageCd>
            <Limit><FormatInteger>50000</FormatInteger><LimitAppliesToCd>PerAccident</LimitAppliesToCd></Limit>
            <CurrentTermAmt><Amt>80.00</Amt></CurrentTermAmt>
          </Coverage>
        </PersVeh>
        <PersVeh id="2" RatedDriverRef="1">
          <Manufacturer>Saab</Manufacturer>
          <Coverage>
            <CoverageCd>COMP</CoverageCd>
            <Deductible><FormatInteger>500</FormatInteger></Deductible>
          </Coverage>
        </PersVeh>
      </PersAutoLineBusiness>
    </PersAutoPolicyQuoteInqRs>
  </InsuranceSvcRs>
</ACORD>"#;

/// A document nested `depth` elements deep, with one text leaf at the bottom.
pub fn deep_document(depth: usize) -> String {
    let mut xml = String::with_capacity(depth * 7 + 16);
    for _ in 0..depth {
        xml.push_str("<n>");
    }
    xml.push_str("leaf");
    for _ in 0..depth {
        xml.push_str("</n>");
    }
    xml
}
