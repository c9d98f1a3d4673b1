/*!
# `IF <expression> <relation> <expression> THEN <statement>`

## Purpose
Run a statement only when a comparison holds.

## Remarks
The relation is one of `==`, `!=`, `<`, `>`, `<=`, `>=`. Numbers
compare across integer and float freely. Strings and dictionaries may
be tested for equality, but ordering them is an error. Values of
different shapes are simply unequal.

When the comparison fails, the rest of the line is skipped. The
statement after `THEN` may be any statement, including another `IF`.

## Example
```text
input age
if age >= 18 then print "come on in"
if age < 18 then print "sorry"
```

*/
