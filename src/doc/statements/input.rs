/*!
# `INPUT <name> [, <name> ...]`

## Purpose
Read values from the operator into variables.

## Remarks
One line of input is read for each name in the list. The text is kept
as an integer when it parses as one, then as a float, and otherwise as
the string itself; a dictionary can never arrive through `INPUT`.

## Example
```text
INPUT A, B
PRINT A," + ",B," == ",A+B
```
With `7` and `3` typed in, this prints `7 + 3 == 10`.

*/
