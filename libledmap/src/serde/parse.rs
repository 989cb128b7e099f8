use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, none_of, one_of},
    combinator::{all_consuming, map_res, opt},
    multi::{fold_many0, separated_list0},
    sequence::{delimited, pair, preceded, separated_pair, tuple},
    IResult,
};

pub type Entry = (String, Vec<u8>);

fn separator(input: &str) -> IResult<&str, (&str, char, &str)> {
    tuple((multispace0, char(','), multispace0))(input)
}

fn trailing_comma(input: &str) -> IResult<&str, Option<char>> {
    opt(preceded(multispace0, char(',')))(input)
}

fn quoted_body<'a>(quote: char) -> impl FnMut(&'a str) -> IResult<&'a str, String> {
    let plain = if quote == '\'' { "\\'" } else { "\\\"" };
    move |input| {
        fold_many0(
            alt((preceded(char('\\'), one_of("\\'\"")), none_of(plain))),
            String::new,
            |mut s, c| {
                s.push(c);
                s
            },
        )(input)
    }
}

pub fn parse_name(input: &str) -> IResult<&str, String> {
    alt((
        delimited(char('\''), quoted_body('\''), char('\'')),
        delimited(char('"'), quoted_body('"'), char('"')),
    ))(input)
}

pub fn parse_byte(input: &str) -> IResult<&str, u8> {
    map_res(digit1, |d: &str| d.parse::<u8>())(input)
}

pub fn parse_bytes(input: &str) -> IResult<&str, Vec<u8>> {
    let (input, _) = pair(char('['), multispace0)(input)?;
    let (input, bytes) = separated_list0(separator, parse_byte)(input)?;
    let (input, _) = trailing_comma(input)?;
    let (input, _) = pair(multispace0, char(']'))(input)?;
    Ok((input, bytes))
}

pub fn parse_entry(input: &str) -> IResult<&str, Entry> {
    separated_pair(
        parse_name,
        tuple((multispace0, char(':'), multispace0)),
        parse_bytes,
    )(input)
}

pub fn parse_mapping(input: &str) -> IResult<&str, Vec<Entry>> {
    let (input, _) = pair(multispace0, char('{'))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, entries) = separated_list0(separator, parse_entry)(input)?;
    let (input, _) = trailing_comma(input)?;
    let (input, _) = tuple((multispace0, char('}'), multispace0))(input)?;
    Ok((input, entries))
}

pub fn parse_complete(input: &str) -> IResult<&str, Vec<Entry>> {
    all_consuming(parse_mapping)(input)
}
